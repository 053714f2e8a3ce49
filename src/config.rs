use serde::Deserialize;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default interval between repeating checks in milliseconds (2 hours)
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 2 * 60 * 60 * 1000;

/// Default timeout for fetch operations in milliseconds (10 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Checker configuration structure
///
/// Host applications that keep their settings in JSON can deserialize a
/// partial object and hand it to
/// [`UpdateCheckerBuilder::apply_config`](crate::checker::UpdateCheckerBuilder::apply_config);
/// missing fields fall back to the defaults above.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Interval between repeating checks in milliseconds
    pub check_interval: u64,
    /// Fetch timeout in milliseconds
    pub timeout: u64,
    /// Whether checks repeat after the initial one
    pub repeating: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            check_interval: DEFAULT_CHECK_INTERVAL_MS,
            timeout: DEFAULT_FETCH_TIMEOUT_MS,
            repeating: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checker_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<CheckerConfig>(json!({
            "checkInterval": 1000
        }))
        .unwrap();

        assert_eq!(result.check_interval, 1000);
        assert_eq!(result.timeout, DEFAULT_FETCH_TIMEOUT_MS);
        assert!(result.repeating);
    }

    #[test]
    fn checker_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<CheckerConfig>(json!({
            "checkInterval": 5000,
            "timeout": 2500,
            "repeating": false
        }))
        .unwrap();

        assert_eq!(
            result,
            CheckerConfig {
                check_interval: 5000,
                timeout: 2500,
                repeating: false,
            }
        );
    }
}

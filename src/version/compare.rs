//! Version comparison under a shared scheme
//!
//! Given two version strings that conform to the same [`VersionScheme`], the
//! comparator walks the scheme's fields in significance order and reports the
//! most significant field at which the distributed version differs from the
//! current one. The walk is pure: same inputs always yield the same result.

use crate::version::error::VersionError;
use crate::version::scheme::VersionScheme;

/// The most significant field at which a distributed version exceeds the
/// current one, or [`VersionChange::None`] when no field differs.
///
/// A distributed version that is *behind* the current one also yields `None`;
/// this engine does not distinguish "equal" from "older than current".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChange {
    None,
    Major,
    Minor,
    Patch,
    PreRelease,
    Metadata,
    Year,
    Month,
    Day,
}

/// Compare two version strings under `scheme`.
///
/// Textually identical strings short-circuit to `None` without parsing, so
/// two equal strings that would not even match the scheme still count as "no
/// update". Otherwise both strings must match the scheme's pattern;
/// [`VersionError::SchemeMismatch`] is returned for the first one that does
/// not.
///
/// Field semantics: a field absent on both sides is not a difference; a field
/// present on exactly one side is. When both sides carry integers they are
/// ordered numerically and only distributed > current counts; non-integer
/// fields (prerelease identifiers, build metadata) count on any textual
/// inequality.
pub fn compare(
    scheme: VersionScheme,
    distributed: &str,
    current: &str,
) -> Result<VersionChange, VersionError> {
    if distributed.is_empty() {
        return Err(VersionError::MissingArgument("distributed version"));
    }
    if current.is_empty() {
        return Err(VersionError::MissingArgument("current version"));
    }

    if distributed == current {
        return Ok(VersionChange::None);
    }

    let Some(distributed_captures) = scheme.pattern().captures(distributed) else {
        return Err(VersionError::SchemeMismatch {
            scheme,
            version: distributed.to_string(),
        });
    };
    let Some(current_captures) = scheme.pattern().captures(current) else {
        return Err(VersionError::SchemeMismatch {
            scheme,
            version: current.to_string(),
        });
    };

    for (name, change) in scheme.fields() {
        let distributed_field = distributed_captures.name(name).map_or("", |m| m.as_str());
        let current_field = current_captures.name(name).map_or("", |m| m.as_str());

        if field_differs(current_field, distributed_field) {
            return Ok(*change);
        }
    }

    Ok(VersionChange::None)
}

/// Whether a single field counts as a difference in the walk.
fn field_differs(current: &str, distributed: &str) -> bool {
    if current.is_empty() && distributed.is_empty() {
        return false;
    }
    if current.is_empty() || distributed.is_empty() {
        return true;
    }

    match (current.parse::<u64>(), distributed.parse::<u64>()) {
        (Ok(current_number), Ok(distributed_number)) => distributed_number > current_number,
        _ => distributed != current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.0.0", "1.9.9", VersionChange::Major)]
    #[case("1.3.0", "1.2.9", VersionChange::Minor)]
    #[case("1.2.4", "1.2.3", VersionChange::Patch)]
    #[case("1.2.3", "1.2.3", VersionChange::None)]
    #[case("1.2.3-beta", "1.2.3-alpha", VersionChange::PreRelease)]
    #[case("1.2.3", "1.2.3-alpha", VersionChange::PreRelease)] // prerelease dropped
    #[case("1.2.3-alpha", "1.2.3", VersionChange::PreRelease)] // prerelease added
    #[case("1.2.3+002", "1.2.3+001", VersionChange::Metadata)]
    #[case("10.0.0", "9.0.0", VersionChange::Major)] // numeric, not lexicographic
    #[case("1.0.0", "2.0.0", VersionChange::None)] // behind current reads as no update
    #[case("1.2.2", "1.2.3", VersionChange::None)]
    fn compare_semantic_versions(
        #[case] distributed: &str,
        #[case] current: &str,
        #[case] expected: VersionChange,
    ) {
        assert_eq!(
            compare(VersionScheme::Semantic, distributed, current).unwrap(),
            expected
        );
    }

    // Major difference wins no matter what the lower fields say.
    #[rstest]
    #[case("2.0.0", "1.9.9")]
    #[case("2.1.4", "1.0.0")]
    #[case("3.0.0-alpha", "2.9.9")]
    fn compare_returns_major_when_major_exceeds(#[case] distributed: &str, #[case] current: &str) {
        assert_eq!(
            compare(VersionScheme::Semantic, distributed, current).unwrap(),
            VersionChange::Major
        );
    }

    #[rstest]
    #[case("2.0", "1.9", VersionChange::Major)]
    #[case("1.3", "1.2", VersionChange::Minor)]
    #[case("1.2-beta", "1.2-alpha", VersionChange::PreRelease)]
    #[case("1.2", "1.3", VersionChange::None)]
    fn compare_basic_versions(
        #[case] distributed: &str,
        #[case] current: &str,
        #[case] expected: VersionChange,
    ) {
        assert_eq!(
            compare(VersionScheme::Basic, distributed, current).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case("2024-01-01", "2023-12-31", VersionChange::Year)]
    #[case("2024-02-01", "2024-01-31", VersionChange::Month)]
    #[case("2024-01-02", "2024-01-01", VersionChange::Day)]
    #[case("2024-01-01", "2024-01-01", VersionChange::None)]
    #[case("2023-01-01", "2024-01-01", VersionChange::None)]
    fn compare_calendar_versions(
        #[case] distributed: &str,
        #[case] current: &str,
        #[case] expected: VersionChange,
    ) {
        assert_eq!(
            compare(VersionScheme::Calendar, distributed, current).unwrap(),
            expected
        );
    }

    // Identical strings never parse, so even garbage compares equal.
    #[rstest]
    #[case(VersionScheme::Semantic, "not-a-version")]
    #[case(VersionScheme::Basic, "???")]
    #[case(VersionScheme::Calendar, "1.2.3")]
    fn compare_short_circuits_on_identical_strings(
        #[case] scheme: VersionScheme,
        #[case] version: &str,
    ) {
        assert_eq!(compare(scheme, version, version).unwrap(), VersionChange::None);
    }

    #[rstest]
    #[case("", "1.2.3")]
    #[case("1.2.3", "")]
    fn compare_rejects_empty_arguments(#[case] distributed: &str, #[case] current: &str) {
        let result = compare(VersionScheme::Semantic, distributed, current);
        assert!(matches!(result, Err(VersionError::MissingArgument(_))));
    }

    #[rstest]
    #[case("2024-01-01", "1.2.3")]
    #[case("1.2.3", "2024-01-01")]
    fn compare_rejects_versions_outside_the_scheme(
        #[case] distributed: &str,
        #[case] current: &str,
    ) {
        let result = compare(VersionScheme::Semantic, distributed, current);
        assert!(matches!(
            result,
            Err(VersionError::SchemeMismatch {
                scheme: VersionScheme::Semantic,
                ..
            })
        ));
    }

    #[test]
    fn compare_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                compare(VersionScheme::Semantic, "1.4.0", "1.2.9").unwrap(),
                VersionChange::Minor
            );
        }
    }

    #[rstest]
    #[case("", "", false)]
    #[case("alpha", "", true)]
    #[case("", "alpha", true)]
    #[case("3", "4", true)]
    #[case("4", "3", false)] // numeric fields only count upwards
    #[case("09", "10", true)]
    #[case("alpha", "beta", true)]
    #[case("beta", "alpha", true)] // textual fields count on any inequality
    #[case("alpha", "alpha", false)]
    fn field_differs_follows_partial_field_semantics(
        #[case] current: &str,
        #[case] distributed: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(field_differs(current, distributed), expected);
    }
}

//! SpigotMC legacy API resolver
//!
//! The legacy endpoint answers with the bare version string as plain text
//! rather than JSON, and reports an unknown resource either with a 404 or
//! with an error message in the body.

use std::time::Duration;

use tracing::warn;

use crate::resolver::VersionResolver;
use crate::resolver::error::ResolveError;

/// Default base URL for the SpigotMC API
const DEFAULT_BASE_URL: &str = "https://api.spigotmc.org";

/// Resolver backed by SpigotMC's legacy update API
pub struct SpigotLegacyResolver {
    client: reqwest::Client,
    base_url: String,
}

impl SpigotLegacyResolver {
    /// Creates a new SpigotLegacyResolver with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("update-watch")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for SpigotLegacyResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionResolver for SpigotLegacyResolver {
    async fn resolve(&self, resource_id: u64, timeout: Duration) -> Result<String, ResolveError> {
        let url = format!("{}/legacy/update.php?resource={}", self.base_url, resource_id);

        let response = self.client.get(&url).timeout(timeout).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound(resource_id));
        }

        if !status.is_success() {
            warn!("SpigotMC legacy API returned status {}: {}", status, url);
            return Err(ResolveError::InvalidResponse(format!(
                "unexpected status: {}",
                status
            )));
        }

        let body = response.text().await?;

        // The endpoint reports unknown resources with "Invalid resource" in a
        // 200 response.
        if body.contains("Invalid") {
            return Err(ResolveError::NotFound(resource_id));
        }

        Ok(body.trim().to_string())
    }
}

//! Polymart resource info API resolver

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::resolver::VersionResolver;
use crate::resolver::error::ResolveError;

/// Default base URL for the Polymart API
const DEFAULT_BASE_URL: &str = "https://api.polymart.org";

/// Response from the Polymart resource info API
#[derive(Debug, Deserialize)]
struct PolymartResponse {
    response: PolymartResourceInfo,
}

#[derive(Debug, Deserialize)]
struct PolymartResourceInfo {
    success: bool,
    resource: Option<PolymartResource>,
}

#[derive(Debug, Deserialize)]
struct PolymartResource {
    updates: PolymartUpdates,
}

#[derive(Debug, Deserialize)]
struct PolymartUpdates {
    latest: PolymartLatestUpdate,
}

#[derive(Debug, Deserialize)]
struct PolymartLatestUpdate {
    version: String,
}

/// Resolver backed by Polymart's resource info API
pub struct PolymartResolver {
    client: reqwest::Client,
    base_url: String,
}

impl PolymartResolver {
    /// Creates a new PolymartResolver with a custom base URL
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

impl Default for PolymartResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionResolver for PolymartResolver {
    async fn resolve(&self, resource_id: u64, timeout: Duration) -> Result<String, ResolveError> {
        let url = format!(
            "{}/v1/getResourceInfo/?resource_id={}",
            self.base_url, resource_id
        );

        let response = self.client.get(&url).timeout(timeout).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Polymart API returned status {}: {}", status, url);
            return Err(ResolveError::InvalidResponse(format!(
                "unexpected status: {}",
                status
            )));
        }

        let info: PolymartResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Polymart API response: {}", e);
            ResolveError::InvalidResponse(e.to_string())
        })?;

        // Polymart reports unknown resources with success=false in a 200
        // response.
        if !info.response.success {
            return Err(ResolveError::NotFound(resource_id));
        }

        let resource = info
            .response
            .resource
            .ok_or_else(|| ResolveError::InvalidResponse("missing resource object".to_string()))?;

        Ok(resource.updates.latest.version)
    }
}

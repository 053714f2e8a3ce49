//! SpigotMC simple API resolver

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::resolver::VersionResolver;
use crate::resolver::error::ResolveError;

/// Default base URL for the SpigotMC API
const DEFAULT_BASE_URL: &str = "https://api.spigotmc.org";

/// Response from the SpigotMC simple API
#[derive(Debug, Deserialize)]
struct SpigotResourceResponse {
    current_version: String,
}

/// Resolver backed by SpigotMC's simple resource API
///
/// SpigotMC's simple API is not entirely stable; the version it reports may
/// occasionally lag behind the real latest release. [`SpigotLegacyResolver`]
/// is the fallback for resources where that matters.
///
/// [`SpigotLegacyResolver`]: crate::resolver::spigot_legacy::SpigotLegacyResolver
pub struct SpigotResolver {
    client: reqwest::Client,
    base_url: String,
}

impl SpigotResolver {
    /// Creates a new SpigotResolver with a custom base URL
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

impl Default for SpigotResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionResolver for SpigotResolver {
    async fn resolve(&self, resource_id: u64, timeout: Duration) -> Result<String, ResolveError> {
        let url = format!(
            "{}/simple/0.1/index.php?action=getResource&id={}",
            self.base_url, resource_id
        );

        let response = self.client.get(&url).timeout(timeout).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound(resource_id));
        }

        if !status.is_success() {
            warn!("SpigotMC API returned status {}: {}", status, url);
            return Err(ResolveError::InvalidResponse(format!(
                "unexpected status: {}",
                status
            )));
        }

        let resource: SpigotResourceResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse SpigotMC API response: {}", e);
            ResolveError::InvalidResponse(e.to_string())
        })?;

        Ok(resource.current_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn resolve_returns_current_version() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock(
                "GET",
                "/simple/0.1/index.php?action=getResource&id=12345",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 12345, "current_version": "2.4.1"}"#)
            .create_async()
            .await;

        let resolver = SpigotResolver::new(&server.url());
        let version = resolver
            .resolve(12345, Duration::from_secs(10))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(version, "2.4.1");
    }

    #[tokio::test]
    async fn resolve_returns_not_found_for_unknown_resource() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/simple/0.1/index.php?action=getResource&id=999")
            .with_status(404)
            .create_async()
            .await;

        let resolver = SpigotResolver::new(&server.url());
        let result = resolver.resolve(999, Duration::from_secs(10)).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ResolveError::NotFound(999))));
    }

    #[tokio::test]
    async fn resolve_rejects_body_without_version_field() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/simple/0.1/index.php?action=getResource&id=12345")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 12345}"#)
            .create_async()
            .await;

        let resolver = SpigotResolver::new(&server.url());
        let result = resolver.resolve(12345, Duration::from_secs(10)).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ResolveError::InvalidResponse(_))));
    }
}

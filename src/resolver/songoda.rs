//! Songoda products API resolver

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::resolver::VersionResolver;
use crate::resolver::error::ResolveError;

/// Default base URL for the Songoda API
const DEFAULT_BASE_URL: &str = "https://songoda.com";

/// Response from the Songoda products API
#[derive(Debug, Deserialize)]
struct SongodaResponse {
    data: SongodaProduct,
}

#[derive(Debug, Deserialize)]
struct SongodaProduct {
    versions: Vec<SongodaVersion>,
}

#[derive(Debug, Deserialize)]
struct SongodaVersion {
    version: String,
}

/// Resolver backed by Songoda's products API
///
/// The API lists versions newest first; the first entry is the latest.
pub struct SongodaResolver {
    client: reqwest::Client,
    base_url: String,
}

impl SongodaResolver {
    /// Creates a new SongodaResolver with a custom base URL
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

impl Default for SongodaResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionResolver for SongodaResolver {
    async fn resolve(&self, resource_id: u64, timeout: Duration) -> Result<String, ResolveError> {
        let url = format!("{}/api/v2/products/id/{}", self.base_url, resource_id);

        let response = self.client.get(&url).timeout(timeout).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::NotFound(resource_id));
        }

        if !status.is_success() {
            warn!("Songoda API returned status {}: {}", status, url);
            return Err(ResolveError::InvalidResponse(format!(
                "unexpected status: {}",
                status
            )));
        }

        let product: SongodaResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Songoda API response: {}", e);
            ResolveError::InvalidResponse(e.to_string())
        })?;

        product
            .data
            .versions
            .into_iter()
            .next()
            .map(|v| v.version)
            .ok_or_else(|| ResolveError::InvalidResponse("product has no versions".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn resolve_returns_first_listed_version() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v2/products/id/42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "data": {
                        "versions": [
                            {"version": "3.1.0"},
                            {"version": "3.0.0"}
                        ]
                    }
                }"#,
            )
            .create_async()
            .await;

        let resolver = SongodaResolver::new(&server.url());
        let version = resolver.resolve(42, Duration::from_secs(10)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(version, "3.1.0");
    }

    #[tokio::test]
    async fn resolve_rejects_product_without_versions() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v2/products/id/42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": {"versions": []}}"#)
            .create_async()
            .await;

        let resolver = SongodaResolver::new(&server.url());
        let result = resolver.resolve(42, Duration::from_secs(10)).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ResolveError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn resolve_returns_not_found_on_404() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/api/v2/products/id/999")
            .with_status(404)
            .create_async()
            .await;

        let resolver = SongodaResolver::new(&server.url());
        let result = resolver.resolve(999, Duration::from_secs(10)).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ResolveError::NotFound(999))));
    }
}

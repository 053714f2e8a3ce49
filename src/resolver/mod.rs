//! Version resolvers for resource distribution platforms
//!
//! A resolver fetches the latest distributed version string for a resource id
//! from one concrete third-party API. The comparison engine never sees these
//! APIs; it only receives the opaque version string a resolver returns.
//!
//! # Modules
//!
//! - [`spigot`]: SpigotMC simple API
//! - [`spigot_legacy`]: SpigotMC legacy plain-text API
//! - [`polymart`]: Polymart resource info API
//! - [`songoda`]: Songoda products API
//! - [`error`]: Error types for resolution failures

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::resolver::error::ResolveError;

pub mod error;
pub mod polymart;
pub mod songoda;
pub mod spigot;
pub mod spigot_legacy;

pub use polymart::PolymartResolver;
pub use songoda::SongodaResolver;
pub use spigot::SpigotResolver;
pub use spigot_legacy::SpigotLegacyResolver;

/// Trait for fetching the latest distributed version of a resource
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionResolver: Send + Sync {
    /// Fetches the latest distributed version string for a resource
    ///
    /// # Arguments
    /// * `resource_id` - Platform-specific identifier of the resource
    /// * `timeout` - Upper bound on the whole request
    ///
    /// # Returns
    /// * `Ok(String)` - The distributed version string, uninterpreted
    /// * `Err(ResolveError)` - If the fetch fails
    async fn resolve(&self, resource_id: u64, timeout: Duration) -> Result<String, ResolveError>;
}

//! update-watch
//!
//! A library for checking whether a published resource has an update
//! available. A configurable [`UpdateChecker`] periodically fetches the
//! latest distributed version from a distribution platform through a
//! [`VersionResolver`], compares it against the caller's current version
//! under a detected or asserted [`VersionScheme`], and reports the outcome
//! as an [`UpdateStatus`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use update_watch::UpdateChecker;
//!
//! # async fn example() -> Result<(), update_watch::VersionError> {
//! let checker = Arc::new(
//!     UpdateChecker::builder("1.2.3", 12345)
//!         .on_complete(|status| {
//!             if status.is_available() {
//!                 println!("update available: {:?}", status.distributed_version());
//!             }
//!         })
//!         .build()?,
//! );
//!
//! // One immediate check, then repeats every 2 hours by default.
//! Arc::clone(&checker).spawn();
//!
//! // The latest outcome stays queryable on the retained handle.
//! let _ = checker.last_status();
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod resolver;
pub mod version;

pub use checker::{UpdateChecker, UpdateCheckerBuilder};
pub use config::CheckerConfig;
pub use resolver::VersionResolver;
pub use resolver::error::ResolveError;
pub use version::compare::{VersionChange, compare};
pub use version::error::VersionError;
pub use version::scheme::{VersionScheme, detect};
pub use version::status::{Status, UpdateStatus};

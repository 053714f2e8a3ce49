//! Update status classification
//!
//! Maps the result of a version comparison onto the small closed status set
//! that notification code consumes.

use crate::version::compare::{self, VersionChange};
use crate::version::error::VersionError;
use crate::version::scheme::{self, VersionScheme};

/// Final classification of one check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A newer distributed version exists.
    Available,
    /// A newer distributed version with a major (or calendar year) change.
    MajorAvailable,
    /// A newer distributed version with a minor (or calendar month) change.
    MinorAvailable,
    /// The current version is up to date.
    Unavailable,
    /// The distributed version could not be obtained at all.
    Failed,
}

impl From<VersionChange> for Status {
    fn from(change: VersionChange) -> Self {
        match change {
            VersionChange::None => Status::Unavailable,
            VersionChange::Major | VersionChange::Year => Status::MajorAvailable,
            VersionChange::Minor | VersionChange::Month => Status::MinorAvailable,
            VersionChange::Patch
            | VersionChange::PreRelease
            | VersionChange::Metadata
            | VersionChange::Day => Status::Available,
        }
    }
}

/// Immutable result of one update check.
///
/// Constructed once per check cycle; the checker replaces its cached copy
/// wholesale rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatus {
    distributed_version: Option<String>,
    current_version: String,
    status: Status,
}

impl UpdateStatus {
    /// Classify a `(distributed, current)` pair into an [`UpdateStatus`].
    ///
    /// An absent distributed version means the remote collaborator failed and
    /// always yields [`Status::Failed`] without further processing; this is
    /// the only producer of `Failed`. Without an explicit `scheme`, both
    /// strings must detect to the same scheme.
    pub fn build(
        distributed: Option<&str>,
        current: &str,
        scheme: Option<VersionScheme>,
    ) -> Result<UpdateStatus, VersionError> {
        if current.is_empty() {
            return Err(VersionError::MissingArgument("current version"));
        }

        let Some(distributed) = distributed else {
            return Ok(UpdateStatus {
                distributed_version: None,
                current_version: current.to_string(),
                status: Status::Failed,
            });
        };

        let scheme = match scheme {
            Some(scheme) => scheme,
            None => resolve_scheme(distributed, current)?,
        };

        let change = compare::compare(scheme, distributed, current)?;

        Ok(UpdateStatus {
            distributed_version: Some(distributed.to_string()),
            current_version: current.to_string(),
            status: Status::from(change),
        })
    }

    pub fn distributed_version(&self) -> Option<&str> {
        self.distributed_version.as_deref()
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether any kind of update is available.
    pub fn is_available(&self) -> bool {
        matches!(
            self.status,
            Status::Available | Status::MajorAvailable | Status::MinorAvailable
        )
    }
}

fn resolve_scheme(distributed: &str, current: &str) -> Result<VersionScheme, VersionError> {
    match (scheme::detect(distributed), scheme::detect(current)) {
        (Some(distributed_scheme), Some(current_scheme)) => {
            if distributed_scheme == current_scheme {
                Ok(distributed_scheme)
            } else {
                Err(VersionError::SchemeDisagreement {
                    distributed: distributed_scheme,
                    current: current_scheme,
                })
            }
        }
        _ => Err(VersionError::SchemeUndetectable {
            distributed: distributed.to_string(),
            current: current.to_string(),
        }),
    }
}

use thiserror::Error;

use crate::version::scheme::VersionScheme;

#[derive(Debug, Error)]
pub enum VersionError {
    /// A required argument was empty. Always a caller bug, never retried.
    #[error("{0} must not be empty")]
    MissingArgument(&'static str),

    /// A version string does not conform to the scheme asserted for the
    /// comparison.
    #[error("version '{version}' does not match the {scheme} scheme")]
    SchemeMismatch {
        scheme: VersionScheme,
        version: String,
    },

    /// Neither input string matches any registered scheme.
    #[error("cannot find a version scheme for '{distributed}' / '{current}'")]
    SchemeUndetectable {
        distributed: String,
        current: String,
    },

    /// The two input strings detect to different schemes; never resolved by
    /// silently picking one.
    #[error("current and distributed version schemes must match: got {current} and {distributed}")]
    SchemeDisagreement {
        distributed: VersionScheme,
        current: VersionScheme,
    },
}

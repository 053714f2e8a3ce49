//! Version scheme registry and detection
//!
//! A version string is never valid or invalid on its own; it is only
//! interpreted through the pattern of a [`VersionScheme`]. The set of schemes
//! is closed and their declaration order in [`VersionScheme::ALL`] doubles as
//! detection priority: Basic, then Semantic, then Calendar.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::compare::VersionChange;

static BASIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?$",
    )
    .expect("static regex must compile")
});

static SEMANTIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("static regex must compile")
});

static CALENDAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})$")
        .expect("static regex must compile")
});

/// A recognized version string format.
///
/// Each scheme owns an anchored pattern with named capture groups, one per
/// version field, ordered by descending significance. An optional leading
/// `v` is tolerated and ignored by every pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionScheme {
    /// `MAJOR.MINOR` with an optional prerelease suffix
    Basic,
    /// `MAJOR.MINOR.PATCH` as defined by <https://semver.org>
    Semantic,
    /// `YYYY-MM-DD` as defined by <https://calver.org>
    Calendar,
}

impl VersionScheme {
    /// All schemes in declaration order.
    ///
    /// This order is the detection priority used by [`detect`] and must stay
    /// stable: a string satisfying more than one pattern resolves to the
    /// first matching entry.
    pub const ALL: [VersionScheme; 3] = [
        VersionScheme::Basic,
        VersionScheme::Semantic,
        VersionScheme::Calendar,
    ];

    /// Human-readable description of the scheme's format.
    pub fn description(&self) -> &'static str {
        match self {
            VersionScheme::Basic => "MAJOR.MINOR",
            VersionScheme::Semantic => "MAJOR.MINOR.PATCH - https://semver.org/",
            VersionScheme::Calendar => "YYYY-MM-DD - https://calver.org",
        }
    }

    /// The compiled pattern recognizing this scheme.
    ///
    /// Capture group names match the field names returned by `fields`.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            VersionScheme::Basic => &BASIC_PATTERN,
            VersionScheme::Semantic => &SEMANTIC_PATTERN,
            VersionScheme::Calendar => &CALENDAR_PATTERN,
        }
    }

    /// Whether `version` conforms to this scheme.
    pub fn matches(&self, version: &str) -> bool {
        self.pattern().is_match(version)
    }

    /// Capture group names in descending significance order, paired with the
    /// change classification a difference in that field maps to.
    pub(crate) fn fields(&self) -> &'static [(&'static str, VersionChange)] {
        match self {
            VersionScheme::Basic => &[
                ("major", VersionChange::Major),
                ("minor", VersionChange::Minor),
                ("prerelease", VersionChange::PreRelease),
            ],
            VersionScheme::Semantic => &[
                ("major", VersionChange::Major),
                ("minor", VersionChange::Minor),
                ("patch", VersionChange::Patch),
                ("prerelease", VersionChange::PreRelease),
                ("buildmetadata", VersionChange::Metadata),
            ],
            VersionScheme::Calendar => &[
                ("year", VersionChange::Year),
                ("month", VersionChange::Month),
                ("day", VersionChange::Day),
            ],
        }
    }
}

impl fmt::Display for VersionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VersionScheme::Basic => "basic",
            VersionScheme::Semantic => "semantic",
            VersionScheme::Calendar => "calendar",
        })
    }
}

/// Find the first scheme whose pattern matches `version`.
///
/// Returns `None` when no registered scheme matches; that is an absence the
/// caller must handle, not an error.
pub fn detect(version: &str) -> Option<VersionScheme> {
    VersionScheme::ALL
        .into_iter()
        .find(|scheme| scheme.matches(version))
}

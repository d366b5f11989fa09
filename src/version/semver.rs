//! The semantic version value

use std::hash::{Hash, Hasher};

use crate::version::error::ParseError;
use crate::version::parser;

/// A Semantic Versioning 2.0.0 version.
///
/// Immutable once built. Equality and hashing cover `major`, `minor`, `patch`
/// and the pre-release label; build metadata is carried for display only.
///
/// Equality compares the pre-release label case-sensitively, while
/// [`Version::compare`] lower-cases labels before walking identifiers. Two
/// versions whose labels differ only in ASCII case (`1.0.0-RC.1` and
/// `1.0.0-rc.1`) therefore compare `Equal` but are not `==`.
#[derive(Debug, Clone, Eq)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
}

impl Version {
    /// Create a release version with no pre-release label or build metadata.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Attach a pre-release label without validating it.
    ///
    /// An empty label is treated as absent.
    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = Some(pre_release.into()).filter(|s| !s.is_empty());
        self
    }

    /// Attach build metadata without validating it.
    ///
    /// Empty metadata is treated as absent.
    pub fn with_build_metadata(mut self, build_metadata: impl Into<String>) -> Self {
        self.build_metadata = Some(build_metadata.into()).filter(|s| !s.is_empty());
        self
    }

    /// Build a version from its parts, checking both labels against the grammar.
    pub fn try_from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build_metadata: Option<&str>,
    ) -> Result<Self, ParseError> {
        if let Some(label) = pre_release.filter(|label| !parser::is_valid_pre_release(label)) {
            return Err(ParseError::InvalidLabel {
                label: "pre-release",
                input: label.to_string(),
            });
        }
        if let Some(label) = build_metadata.filter(|label| !parser::is_valid_build_metadata(label))
        {
            return Err(ParseError::InvalidLabel {
                label: "build metadata",
                input: label.to_string(),
            });
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre_release: pre_release.map(str::to_string),
            build_metadata: build_metadata.map(str::to_string),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Whether this version carries a pre-release label
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

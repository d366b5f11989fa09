//! Conversions between [`Version`] and `semver::Version`

use semver::{BuildMetadata, Prerelease};

use crate::version::error::InteropError;
use crate::version::semver::Version;

impl From<&semver::Version> for Version {
    fn from(version: &semver::Version) -> Self {
        Self::new(version.major, version.minor, version.patch)
            .with_pre_release(version.pre.as_str())
            .with_build_metadata(version.build.as_str())
    }
}

impl From<semver::Version> for Version {
    fn from(version: semver::Version) -> Self {
        Self::from(&version)
    }
}

/// Fails only for versions built with unchecked labels.
impl TryFrom<&Version> for semver::Version {
    type Error = InteropError;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        let pre = match version.pre_release() {
            Some(label) => Prerelease::new(label)?,
            None => Prerelease::EMPTY,
        };
        let build = match version.build_metadata() {
            Some(label) => BuildMetadata::new(label)?,
            None => BuildMetadata::EMPTY,
        };

        Ok(semver::Version {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre,
            build,
        })
    }
}

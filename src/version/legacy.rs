//! Four-field numeric versions (`major.minor[.build[.revision]]`)
//!
//! Converts into a [`Version`] with `build` as the patch number and `revision`
//! as build metadata: `1.2.3.4` becomes `1.2.3+4`.

use std::fmt;
use std::str::FromStr;

use crate::version::error::LegacyParseError;
use crate::version::semver::Version;

/// A plain numeric version with two to four components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LegacyVersion {
    major: u64,
    minor: u64,
    build: Option<u64>,
    revision: Option<u64>,
}

impl LegacyVersion {
    pub const fn new(major: u64, minor: u64) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }

    pub const fn with_build(mut self, build: u64) -> Self {
        self.build = Some(build);
        self
    }

    pub const fn with_revision(mut self, revision: u64) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn build(&self) -> Option<u64> {
        self.build
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }
}

impl FromStr for LegacyVersion {
    type Err = LegacyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(LegacyParseError::ComponentCount(s.to_string()));
        }

        let numbers = parts
            .iter()
            .map(|part| parse_component(part, s))
            .collect::<Result<Vec<u64>, _>>()?;

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            build: numbers.get(2).copied(),
            revision: numbers.get(3).copied(),
        })
    }
}

fn parse_component(part: &str, input: &str) -> Result<u64, LegacyParseError> {
    let invalid = || LegacyParseError::InvalidComponent {
        component: part.to_string(),
        input: input.to_string(),
    };

    if part.is_empty() || !part.bytes().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse::<u64>().map_err(|_| invalid())
}

impl fmt::Display for LegacyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        match (self.build, self.revision) {
            (None, None) => Ok(()),
            (Some(build), None) => write!(f, ".{build}"),
            (build, Some(revision)) => write!(f, ".{}.{revision}", build.unwrap_or(0)),
        }
    }
}

impl Version {
    /// Convert a legacy numeric version. Absent fields become zero, so the
    /// result always carries build metadata.
    pub fn from_legacy(legacy: &LegacyVersion) -> Self {
        Self::new(legacy.major, legacy.minor, legacy.build.unwrap_or(0))
            .with_build_metadata(legacy.revision.unwrap_or(0).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn from_legacy_maps_build_to_patch_and_revision_to_metadata() {
        let legacy = LegacyVersion::new(1, 2).with_build(3).with_revision(4);

        let version = Version::from_legacy(&legacy);

        assert_eq!(version, Version::new(1, 2, 3));
        assert_eq!(version.pre_release(), None);
        assert_eq!(version.build_metadata(), Some("4"));
        assert_eq!(version.to_string(), "1.2.3+4");
    }

    #[test]
    fn from_legacy_maps_absent_fields_to_zero() {
        let version = Version::from_legacy(&LegacyVersion::new(5, 6));

        assert_eq!(version.patch(), 0);
        assert_eq!(version.build_metadata(), Some("0"));
    }

    #[rstest]
    #[case("1.2", LegacyVersion::new(1, 2))]
    #[case("1.2.3", LegacyVersion::new(1, 2).with_build(3))]
    #[case("1.2.3.4", LegacyVersion::new(1, 2).with_build(3).with_revision(4))]
    #[case("01.002.3.4", LegacyVersion::new(1, 2).with_build(3).with_revision(4))]
    fn from_str_parses_components(#[case] input: &str, #[case] expected: LegacyVersion) {
        assert_eq!(input.parse::<LegacyVersion>(), Ok(expected));
    }

    #[rstest]
    #[case("1")]
    #[case("1.2.3.4.5")]
    fn from_str_rejects_component_count(#[case] input: &str) {
        assert_eq!(
            input.parse::<LegacyVersion>(),
            Err(LegacyParseError::ComponentCount(input.to_string()))
        );
    }

    #[rstest]
    #[case("1.x")]
    #[case("1.-2")]
    #[case("1..3")]
    #[case("1.2.99999999999999999999")]
    fn from_str_rejects_invalid_components(#[case] input: &str) {
        assert!(matches!(
            input.parse::<LegacyVersion>(),
            Err(LegacyParseError::InvalidComponent { .. })
        ));
    }

    #[rstest]
    #[case(LegacyVersion::new(1, 2), "1.2")]
    #[case(LegacyVersion::new(1, 2).with_build(3), "1.2.3")]
    #[case(LegacyVersion::new(1, 2).with_build(3).with_revision(4), "1.2.3.4")]
    #[case(LegacyVersion::new(1, 2).with_revision(4), "1.2.0.4")]
    fn display_renders_present_components(#[case] legacy: LegacyVersion, #[case] expected: &str) {
        assert_eq!(legacy.to_string(), expected);
    }
}

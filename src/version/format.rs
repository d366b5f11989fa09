//! Rendering versions at different levels of detail
//!
//! | Level | Output                                  |
//! |-------|-----------------------------------------|
//! | 1     | `1`                                     |
//! | 2     | `1.2`                                   |
//! | 3     | `1.2.3` (neutral)                       |
//! | 4     | `1.2.3-rc.1`, or `1.2.3+b5` if no label |
//! | 5     | `1.2.3-rc.1+b5` (general)               |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::FormatError;
use crate::version::semver::Version;

/// How much of a version to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormatLevel {
    Major = 1,
    MajorMinor = 2,
    MajorMinorPatch = 3,
    /// Core plus the pre-release label, or the build metadata when there is
    /// no label. Never both.
    PreReleaseOrBuild = 4,
    Full = 5,
}

impl FormatLevel {
    /// Every field that is present
    pub const GENERAL: Self = Self::Full;
    /// `major.minor.patch` only
    pub const NEUTRAL: Self = Self::MajorMinorPatch;

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Default for FormatLevel {
    fn default() -> Self {
        Self::GENERAL
    }
}

impl TryFrom<u8> for FormatLevel {
    type Error = FormatError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Major),
            2 => Ok(Self::MajorMinor),
            3 => Ok(Self::MajorMinorPatch),
            4 => Ok(Self::PreReleaseOrBuild),
            5 => Ok(Self::Full),
            _ => Err(FormatError::LevelOutOfRange(level)),
        }
    }
}

impl FromStr for FormatLevel {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("general") {
            return Ok(Self::GENERAL);
        }
        if name.eq_ignore_ascii_case("neutral") {
            return Ok(Self::NEUTRAL);
        }

        let level = name
            .parse::<u8>()
            .map_err(|_| FormatError::UnknownLevel(s.to_string()))?;
        Self::try_from(level)
    }
}

impl fmt::Display for FormatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl Serialize for FormatLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for FormatLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u8),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(level) => Self::try_from(level),
            Raw::Name(name) => name.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

impl Version {
    /// Render at the given level.
    pub fn format(&self, level: FormatLevel) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_level(&mut out, level);
        out
    }

    /// Render at a numeric level between 1 and 5.
    pub fn to_string_level(&self, level: u8) -> Result<String, FormatError> {
        FormatLevel::try_from(level).map(|level| self.format(level))
    }

    fn write_level<W: fmt::Write>(&self, out: &mut W, level: FormatLevel) -> fmt::Result {
        write!(out, "{}", self.major())?;
        if level == FormatLevel::Major {
            return Ok(());
        }
        write!(out, ".{}", self.minor())?;
        if level == FormatLevel::MajorMinor {
            return Ok(());
        }
        write!(out, ".{}", self.patch())?;

        match level {
            FormatLevel::PreReleaseOrBuild => {
                if let Some(pre_release) = self.pre_release() {
                    write!(out, "-{pre_release}")?;
                } else if let Some(build_metadata) = self.build_metadata() {
                    write!(out, "+{build_metadata}")?;
                }
            }
            FormatLevel::Full => {
                if let Some(pre_release) = self.pre_release() {
                    write!(out, "-{pre_release}")?;
                }
                if let Some(build_metadata) = self.build_metadata() {
                    write!(out, "+{build_metadata}")?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_level(f, FormatLevel::GENERAL)
    }
}

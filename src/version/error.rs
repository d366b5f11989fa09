use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid version: input is missing")]
    Missing,

    #[error("Invalid version: input is empty")]
    Empty,

    #[error("Invalid version '{0}': expected MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]")]
    Malformed(String),

    #[error("Invalid version '{input}': {component} does not fit in 64 bits")]
    ComponentOverflow {
        component: &'static str,
        input: String,
    },

    #[error("Invalid {label} label '{input}'")]
    InvalidLabel { label: &'static str, input: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format level {0} is out of range: expected 1 to 5")]
    LevelOutOfRange(u8),

    #[error("Unknown format level '{0}': expected 1 to 5, 'general' or 'neutral'")]
    UnknownLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    #[error("Object is not a Version and cannot be compared with one")]
    IncomparableType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegacyParseError {
    #[error("Invalid legacy version '{0}': expected 2 to 4 dot-separated components")]
    ComponentCount(String),

    #[error("Invalid legacy version '{input}': '{component}' is not a non-negative integer")]
    InvalidComponent { component: String, input: String },
}

#[derive(Debug, Error)]
pub enum InteropError {
    #[error("Version is not representable as semver::Version: {0}")]
    Semver(#[from] semver::Error),
}

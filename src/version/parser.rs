//! Version text parsing
//!
//! One anchored regular expression drives every entry point:
//! - [`Version::parse`]: returns `Result<Version, ParseError>`
//! - [`Version::try_parse`]: returns `Option<Version>`
//! - [`Version::parse_or_panic`]: panics with the offending input
//!
//! Character classes are spelled `[0-9]` rather than `\d`, which matches any
//! Unicode digit in the `regex` crate.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::error::ParseError;
use crate::version::semver::Version;

const NUMBER: &str = r"0|[1-9][0-9]*";
const PRE_RELEASE_IDENTIFIER: &str = r"(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)";
const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<major>{NUMBER})\.(?P<minor>{NUMBER})\.(?P<patch>{NUMBER})(?:-(?P<prerelease>{PRE_RELEASE_IDENTIFIER}(?:\.{PRE_RELEASE_IDENTIFIER})*))?(?:\+(?P<buildmetadata>{BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*))?$"
    ))
    .unwrap()
});

static PRE_RELEASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{PRE_RELEASE_IDENTIFIER}(?:\.{PRE_RELEASE_IDENTIFIER})*$"
    ))
    .unwrap()
});

static BUILD_METADATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*$")).unwrap()
});

/// Check a pre-release label (the text after `-`) against the grammar
pub fn is_valid_pre_release(label: &str) -> bool {
    PRE_RELEASE_RE.is_match(label)
}

/// Check build metadata (the text after `+`) against the grammar
pub fn is_valid_build_metadata(label: &str) -> bool {
    BUILD_METADATA_RE.is_match(label)
}

/// Parse possibly-absent input. `None` and `""` are rejected like any other
/// non-matching text.
pub fn parse_input(input: Option<&str>) -> Result<Version, ParseError> {
    let Some(input) = input else {
        debug!("Rejected absent version input");
        return Err(ParseError::Missing);
    };
    if input.is_empty() {
        debug!("Rejected empty version input");
        return Err(ParseError::Empty);
    }

    let Some(captures) = VERSION_RE.captures(input) else {
        debug!("Rejected malformed version '{}'", input);
        return Err(ParseError::Malformed(input.to_string()));
    };

    let number = |component: &'static str| -> Result<u64, ParseError> {
        captures[component]
            .parse::<u64>()
            .map_err(|_| ParseError::ComponentOverflow {
                component,
                input: input.to_string(),
            })
    };

    let version = Version::new(number("major")?, number("minor")?, number("patch")?);
    let version = match captures.name("prerelease") {
        Some(label) => version.with_pre_release(label.as_str()),
        None => version,
    };
    let version = match captures.name("buildmetadata") {
        Some(label) => version.with_build_metadata(label.as_str()),
        None => version,
    };

    Ok(version)
}

impl Version {
    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_input(Some(text))
    }

    /// Parse input that may be absent, e.g. an optional field.
    pub fn parse_optional(text: Option<&str>) -> Result<Self, ParseError> {
        parse_input(text)
    }

    /// Parse, returning `None` instead of an error on failure.
    pub fn try_parse(text: &str) -> Option<Self> {
        parse_input(Some(text)).ok()
    }

    /// Parse, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with a message naming `text` when it is not a valid version.
    pub fn parse_or_panic(text: &str) -> Self {
        match parse_input(Some(text)) {
            Ok(version) => version,
            Err(e) => panic!("'{text}' is not a valid semantic version: {e}"),
        }
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

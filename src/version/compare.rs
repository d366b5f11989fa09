//! Precedence ordering between versions
//!
//! Rules, in order:
//! 1. `major`, then `minor`, then `patch` compare numerically
//! 2. A version with a pre-release label is lower than the same version without one
//! 3. Pre-release labels compare identifier by identifier (case-insensitive):
//!    numeric identifiers compare as integers and sort before alphanumeric ones,
//!    alphanumeric identifiers compare as bytes
//! 4. When every shared identifier is equal, the longer label is higher
//!
//! Build metadata never takes part.

use std::any::Any;
use std::cmp::Ordering;

use crate::version::error::CompareError;
use crate::version::semver::Version;

impl Version {
    /// Three-way precedence comparison.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| match (self.pre_release(), other.pre_release()) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => compare_pre_release(a, b),
            })
    }

    /// Compare against a value of unknown type.
    ///
    /// An absent value ranks below every version. Anything that is not a
    /// [`Version`] yields [`CompareError::IncomparableType`].
    pub fn compare_dyn(&self, other: Option<&dyn Any>) -> Result<Ordering, CompareError> {
        let Some(other) = other else {
            return Ok(Ordering::Greater);
        };

        other
            .downcast_ref::<Version>()
            .map(|other| self.compare(other))
            .ok_or(CompareError::IncomparableType)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precedence order. See [`Version`] for how this differs from `==` when
/// pre-release labels differ only in case.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// The higher of two versions; `b` when they tie.
pub fn max(a: Version, b: Version) -> Version {
    if a.compare(&b) == Ordering::Greater {
        a
    } else {
        b
    }
}

/// The lower of two versions; `b` when they tie.
pub fn min(a: Version, b: Version) -> Version {
    if a.compare(&b) == Ordering::Less { a } else { b }
}

/// Compare two dot-separated pre-release labels.
pub fn compare_pre_release(a: &str, b: &str) -> Ordering {
    let left: Vec<&str> = a.split('.').collect();
    let right: Vec<&str> = b.split('.').collect();

    left.iter()
        .zip(right.iter())
        .map(|(l, r)| compare_identifier(l, r))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a
            .bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase())),
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|c| c.is_ascii_digit())
}

/// Compare digit strings of any length as integers.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

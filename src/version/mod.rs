//! Semantic version value layer
//!
//! This module provides the [`Version`] value type: parsing text into
//! structured fields, precedence ordering between two versions, and rendering
//! back to text at several levels of detail.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Parser    │────▶│   Version   │◀────│   Legacy    │
//! │  (regex)    │     │   (value)   │     │ (a.b.c.d)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                        │       │
//!                        ▼       ▼
//!              ┌─────────────┐ ┌─────────────┐
//!              │  Compare    │ │   Format    │
//!              │(precedence) │ │ (levels 1-5)│
//!              └─────────────┘ └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: The `Version` value, constructors, equality and hashing
//! - [`parser`]: Anchored grammar and the parse entry points
//! - [`compare`]: Precedence comparison, `Ord`, `max`/`min`
//! - [`format`]: `FormatLevel` and level-based rendering
//! - [`legacy`]: Four-field numeric versions and their conversion
//! - [`interop`]: Conversions to and from the `semver` crate
//! - [`serde`]: Canonical-text serialization
//! - [`error`]: Error types for parsing, formatting and comparison

pub mod compare;
pub mod error;
pub mod format;
pub mod interop;
pub mod legacy;
pub mod parser;
pub mod semver;
pub mod serde;

pub use error::{CompareError, FormatError, InteropError, LegacyParseError, ParseError};
pub use format::FormatLevel;
pub use legacy::LegacyVersion;
pub use self::semver::Version;

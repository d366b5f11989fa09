//! Semantic Versioning 2.0.0 value type
//!
//! The [`version`] module holds the [`Version`](version::Version) value with
//! its parser, precedence comparator and formatter. [`config`] and
//! [`logging`] back the `semver-value` command-line tool.

pub mod config;
pub mod logging;
pub mod version;

pub use version::{FormatLevel, LegacyVersion, Version};

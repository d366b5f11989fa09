use std::cmp::Ordering;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use semver_value::config::{self, Config};
use semver_value::logging;
use semver_value::version::compare;
use semver_value::{FormatLevel, LegacyVersion, Version};

#[derive(Parser)]
#[command(name = "semver-value")]
#[command(version, about = "Parse, compare and format semantic versions")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/semver-value/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the fields of a version
    Parse {
        version: Version,
        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print `<`, `=` or `>` for the precedence of A against B
    Compare { a: Version, b: Version },
    /// Render a version at a level from 1 to 5, `general` or `neutral`
    Format {
        version: Version,
        #[arg(short, long)]
        level: Option<FormatLevel>,
    },
    /// Sort versions by precedence, reading stdin when none are given
    Sort {
        versions: Vec<Version>,
        #[arg(short, long)]
        reverse: bool,
    },
    /// Print the higher of two versions
    Max { a: Version, b: Version },
    /// Print the lower of two versions
    Min { a: Version, b: Version },
    /// Convert a numeric `major.minor[.build[.revision]]` version
    Convert { legacy: LegacyVersion },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedVersion<'a> {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<&'a str>,
    build_metadata: Option<&'a str>,
    canonical: String,
}

impl<'a> From<&'a Version> for ParsedVersion<'a> {
    fn from(version: &'a Version) -> Self {
        Self {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release(),
            build_metadata: version.build_metadata(),
            canonical: version.to_string(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)?;
    let _guard = logging::init(&config.log, &config::log_path())?;
    debug!("Loaded config from {}", config_path.display());

    match cli.command {
        Command::Parse { version, json } => {
            let parsed = ParsedVersion::from(&version);
            if json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("major:          {}", parsed.major);
                println!("minor:          {}", parsed.minor);
                println!("patch:          {}", parsed.patch);
                println!("pre-release:    {}", parsed.pre_release.unwrap_or("-"));
                println!("build metadata: {}", parsed.build_metadata.unwrap_or("-"));
            }
        }
        Command::Compare { a, b } => {
            let symbol = match a.compare(&b) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{symbol}");
        }
        Command::Format { version, level } => {
            let level = level.unwrap_or(config.format.default_level);
            println!("{}", version.format(level));
        }
        Command::Sort { versions, reverse } => {
            let mut versions = if versions.is_empty() {
                read_versions_from_stdin()?
            } else {
                versions
            };
            if reverse {
                versions.sort_by(|a, b| b.compare(a));
            } else {
                versions.sort();
            }
            for version in versions {
                println!("{version}");
            }
        }
        Command::Max { a, b } => println!("{}", compare::max(a, b)),
        Command::Min { a, b } => println!("{}", compare::min(a, b)),
        Command::Convert { legacy } => {
            println!("{}", Version::from_legacy(&legacy).format(FormatLevel::GENERAL));
        }
    }

    Ok(())
}

fn read_versions_from_stdin() -> anyhow::Result<Vec<Version>> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read versions from stdin")?;

    input
        .split_whitespace()
        .map(|text| Version::parse(text).with_context(|| format!("Invalid version '{text}'")))
        .collect()
}

//! CLI command definitions.
//!
//! This module defines the command structure for the pkgdev CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

pub mod check;
pub mod create;
pub mod profiles;

/// pkgdev - package development tool
#[derive(Parser)]
#[command(name = "pkgdev")]
#[command(version, about = "pkgdev - scaffold, validate and run packages against local profiles")]
#[command(long_about = r#"
pkgdev scaffolds and validates packages, and manages the local profiles that
hold per-environment configuration.

COMMANDS:
  profiles      → Create, list, show and delete profiles
  create        → Create a new package
  check         → Validate a package directory

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or missing profile/package
  3 - Validation failure
  4 - Profile error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory containing profiles (defaults to ~/.pkgdev/profiles)
    #[arg(long, global = true, env = "PKGDEV_PROFILES_DIR")]
    pub profiles_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage profiles
    Profiles(profiles::ProfilesArgs),

    /// Create a new package
    Create(create::CreateArgs),

    /// Validate a package
    Check(check::CheckArgs),
}

/// Resolve a user-supplied path against the current directory.
pub(crate) fn absolute(path: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(match path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => cwd,
    })
}

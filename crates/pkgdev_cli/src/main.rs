//! pkgdev CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or missing profile/package
//! - 3: Validation failure
//! - 4: Profile error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pkgdev_archetype::ArchetypeError;
use pkgdev_profile::ProfileError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const PROFILE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Profiles(args) => commands::profiles::execute(args, cli.profiles_dir),
        Commands::Create(args) => commands::create::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Install the stderr subscriber. A subscriber that is already set is kept.
fn init_logging(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        "pkgdev=debug,warn"
    } else if quiet {
        "error"
    } else {
        "pkgdev=info,warn"
    };

    // Logs go to stderr so command output stays machine-readable
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)))
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<ProfileError>() {
            return match err {
                ProfileError::InvalidName { .. } => ExitCodes::INVALID_ARGS,
                err if err.is_not_a_profile() => ExitCodes::INVALID_ARGS,
                _ => ExitCodes::PROFILE_ERROR,
            };
        }
        if let Some(err) = cause.downcast_ref::<ArchetypeError>() {
            return match err {
                ArchetypeError::ValidationFailed(_) => ExitCodes::VALIDATION_FAILURE,
                ArchetypeError::NotFound(_) | ArchetypeError::InvalidDescriptor(_) => {
                    ExitCodes::INVALID_ARGS
                }
                _ => ExitCodes::GENERAL_ERROR,
            };
        }
    }
    ExitCodes::GENERAL_ERROR
}

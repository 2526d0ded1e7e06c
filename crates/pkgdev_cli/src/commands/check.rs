//! Check command - Validate a package.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use pkgdev_archetype::{ArchetypeError, PackageValidator};

#[derive(Args)]
pub struct CheckArgs {
    /// Package directory (defaults to current directory)
    path: Option<PathBuf>,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let path = super::absolute(args.path.as_deref())?;
    info!("Validating package at {:?}", path);

    let result = PackageValidator::validate_from_path(&path)
        .with_context(|| format!("Failed to validate {}", path.display()))?;

    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }

    if !result.valid {
        println!("   ❌ Package validation failed:");
        for error in &result.errors {
            println!("      - {}", error);
        }
        return Err(ArchetypeError::ValidationFailed(format!(
            "{} error(s) in {}",
            result.errors.len(),
            path.display()
        ))
        .into());
    }

    println!("✅ Package is valid");
    Ok(())
}

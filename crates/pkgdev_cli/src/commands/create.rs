//! Create command - Scaffold a new package.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::info;

use pkgdev_archetype::{create_package, Owner, PackageDescriptor, PackageManifest};

#[derive(Args)]
pub struct CreateArgs {
    #[command(subcommand)]
    command: CreateCommand,
}

#[derive(Subcommand)]
enum CreateCommand {
    /// Create a new package
    Package(PackageArgs),
}

#[derive(Args)]
struct PackageArgs {
    /// Package name (lowercase letters, digits and underscores)
    #[arg(short, long)]
    name: String,

    /// Human-readable title
    #[arg(short, long)]
    title: String,

    /// Package version
    #[arg(id = "package_version", long = "package-version", default_value = "0.0.1")]
    version: String,

    /// Package type
    #[arg(long = "type", default_value = "integration")]
    package_type: String,

    /// Short description
    #[arg(short, long, default_value = "")]
    description: String,

    /// GitHub owner of the package
    #[arg(long, default_value = "")]
    owner: String,

    /// Categories
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Parent directory for the package (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,
}

pub fn execute(args: CreateArgs) -> Result<()> {
    match args.command {
        CreateCommand::Package(args) => package(args),
    }
}

fn package(args: PackageArgs) -> Result<()> {
    let parent = super::absolute(args.path.as_deref())?;
    info!("Creating package {} in {:?}", args.name, parent);

    let descriptor = PackageDescriptor::new(PackageManifest {
        name: args.name,
        title: args.title,
        version: args.version,
        package_type: args.package_type,
        description: args.description,
        owner: Owner { github: args.owner },
        categories: args.categories,
        ..PackageManifest::default()
    });

    let package_dir = create_package(&descriptor, &parent).context("Failed to create package")?;

    println!("✅ Package created at {}", package_dir.display());
    println!();
    println!("Next steps:");
    println!("  pkgdev check {}", package_dir.display());
    Ok(())
}

//! Profiles command - Manage local profiles.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use tracing::info;

use pkgdev_profile::{CreateOptions, Metadata, ProfileManager};

#[derive(Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    command: ProfilesCommand,
}

#[derive(Subcommand)]
enum ProfilesCommand {
    /// Create a new profile
    Create(CreateProfileArgs),

    /// List available profiles
    List(ListArgs),

    /// Delete a profile
    Delete(DeleteArgs),

    /// Show a profile's location and environment
    Show(ShowArgs),
}

#[derive(Args)]
struct CreateProfileArgs {
    /// Name of the profile (defaults to "default")
    #[arg(short, long, default_value = "")]
    name: String,

    /// Profile to copy from ("default" uses the bundled profile)
    #[arg(short, long)]
    from: Option<String>,

    /// Overwrite an existing profile's bundled files
    #[arg(long)]
    overwrite: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Args)]
struct DeleteArgs {
    /// Name of the profile to delete
    name: String,
}

#[derive(Args)]
struct ShowArgs {
    /// Name of the profile
    name: String,
}

pub fn execute(args: ProfilesArgs, profiles_dir: Option<PathBuf>) -> Result<()> {
    let manager = match profiles_dir {
        Some(dir) => ProfileManager::new(super::absolute(Some(dir.as_path()))?),
        None => ProfileManager::discover().context("Failed to locate profiles directory")?,
    };

    match args.command {
        ProfilesCommand::Create(args) => create(&manager, args),
        ProfilesCommand::List(args) => {
            ensure_default(&manager)?;
            list(&manager, args)
        }
        ProfilesCommand::Delete(args) => delete(&manager, args),
        ProfilesCommand::Show(args) => {
            ensure_default(&manager)?;
            show(&manager, args)
        }
    }
}

/// The default profile is bootstrapped on first read.
fn ensure_default(manager: &ProfileManager) -> Result<()> {
    if manager
        .ensure_default()
        .context("Failed to create default profile")?
    {
        info!("Created default profile in {:?}", manager.root());
    }
    Ok(())
}

fn create(manager: &ProfileManager, args: CreateProfileArgs) -> Result<()> {
    let mut options = CreateOptions::new(args.name).overwrite(args.overwrite);
    if let Some(from) = args.from {
        options = options.from_profile(from);
    }

    let path = manager.create(options).context("Failed to create profile")?;

    println!("✅ Created profile at {}", path.display());
    Ok(())
}

fn list(manager: &ProfileManager, args: ListArgs) -> Result<()> {
    let profiles = manager.list().context("Failed to list profiles")?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&profiles)?);
        }
        OutputFormat::Table => print_table(&profiles),
    }
    Ok(())
}

fn print_table(profiles: &[Metadata]) {
    let name_width = profiles
        .iter()
        .map(|p| p.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(4);

    println!(
        "{:<name_width$}  {:<20}  {:<12}  {:<8}  PATH",
        "NAME", "DATE CREATED", "USER", "VERSION"
    );
    for profile in profiles {
        println!(
            "{:<name_width$}  {:<20}  {:<12}  {:<8}  {}",
            profile.name,
            profile.date_created.format("%Y-%m-%d %H:%M:%S").to_string(),
            profile.user,
            profile.version,
            profile.path.display()
        );
    }
}

fn delete(manager: &ProfileManager, args: DeleteArgs) -> Result<()> {
    manager
        .delete(&args.name)
        .with_context(|| format!("Failed to delete profile {:?}", args.name))?;

    println!("🗑️  Deleted profile {}", args.name);
    Ok(())
}

fn show(manager: &ProfileManager, args: ShowArgs) -> Result<()> {
    let profile = manager
        .load(&args.name)
        .with_context(|| format!("Failed to load profile {:?}", args.name))?;
    let metadata = profile.metadata()?;

    println!("Profile: {}", profile.name);
    println!("  Path:    {}", profile.path.display());
    println!("  Created: {} by {}", metadata.date_created, metadata.user);
    println!("  Version: {}", metadata.version);
    println!("  Environment:");
    for var in profile.compose_env_vars() {
        println!("    {}", var);
    }
    Ok(())
}

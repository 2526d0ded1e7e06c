//! Package validation.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ArchetypeError, ArchetypeResult};
use crate::models::PackageManifest;

pub const MANIFEST_FILE: &str = "manifest.yml";
pub const CHANGELOG_FILE: &str = "changelog.yml";
pub const README_FILE: &str = "docs/README.md";

/// Files every package must contain.
pub const REQUIRED_FILES: &[&str] = &[MANIFEST_FILE, CHANGELOG_FILE, README_FILE];

const PACKAGE_TYPES: &[&str] = &["integration", "input"];

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_]+$").expect("name pattern is valid"))
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$")
            .expect("version pattern is valid")
    })
}

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

#[derive(Debug, Deserialize)]
struct ChangelogEntry {
    version: String,
}

/// Validator for package directories.
pub struct PackageValidator;

impl PackageValidator {
    /// Validate the package at `path`.
    pub fn validate_from_path(path: &Path) -> ArchetypeResult<ValidationResult> {
        if !path.is_dir() {
            return Err(ArchetypeError::NotFound(path.to_path_buf()));
        }

        let mut result = ValidationResult::new();

        for file in REQUIRED_FILES {
            if !path.join(file).is_file() {
                result.add_error(format!("Missing required file: {}", file));
            }
        }

        let manifest_path = path.join(MANIFEST_FILE);
        if manifest_path.is_file() {
            let content = fs::read_to_string(&manifest_path)?;
            match serde_yaml::from_str::<PackageManifest>(&content) {
                Ok(manifest) => {
                    result.merge(Self::validate_manifest(&manifest));

                    let changelog_path = path.join(CHANGELOG_FILE);
                    if changelog_path.is_file() {
                        let changelog = fs::read_to_string(&changelog_path)?;
                        result.merge(Self::validate_changelog(&changelog, &manifest));
                    }
                }
                Err(e) => result.add_error(format!("Invalid {}: {}", MANIFEST_FILE, e)),
            }
        }

        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && entry.metadata().map_or(false, |m| m.len() == 0) {
                let relative = entry.path().strip_prefix(path).unwrap_or(entry.path());
                result.add_warning(format!("Empty file: {}", relative.display()));
            }
        }

        debug!(
            "Validated package {:?}: {} errors, {} warnings",
            path,
            result.errors.len(),
            result.warnings.len()
        );
        Ok(result)
    }

    /// Validate manifest fields.
    pub fn validate_manifest(manifest: &PackageManifest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if manifest.name.is_empty() {
            result.add_error("Manifest name cannot be empty");
        } else if !name_pattern().is_match(&manifest.name) {
            result.add_error(format!(
                "Manifest name '{}' must contain only lowercase letters, digits and underscores",
                manifest.name
            ));
        }

        if manifest.title.is_empty() {
            result.add_error("Manifest title cannot be empty");
        }

        if manifest.version.is_empty() {
            result.add_error("Manifest version cannot be empty");
        } else if !version_pattern().is_match(&manifest.version) {
            result.add_error(format!(
                "Manifest version '{}' is not a semantic version",
                manifest.version
            ));
        }

        if !PACKAGE_TYPES.contains(&manifest.package_type.as_str()) {
            result.add_error(format!(
                "Manifest type '{}' must be one of: {}",
                manifest.package_type,
                PACKAGE_TYPES.join(", ")
            ));
        }

        if manifest.owner.github.is_empty() {
            result.add_error("Manifest owner.github cannot be empty");
        }

        if manifest.description.is_empty() {
            result.add_warning("Manifest description is recommended");
        }

        if manifest.categories.is_empty() {
            result.add_warning("Manifest categories are recommended");
        }

        result
    }

    /// The newest changelog entry must match the manifest version.
    pub fn validate_changelog(content: &str, manifest: &PackageManifest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match serde_yaml::from_str::<Vec<ChangelogEntry>>(content) {
            Ok(entries) => match entries.first() {
                Some(entry) if entry.version != manifest.version => {
                    result.add_error(format!(
                        "Changelog version '{}' does not match manifest version '{}'",
                        entry.version, manifest.version
                    ));
                }
                Some(_) => {}
                None => result.add_error("Changelog has no entries"),
            },
            Err(e) => result.add_error(format!("Invalid {}: {}", CHANGELOG_FILE, e)),
        }

        result
    }
}

/// Validate a package and fail with every error found.
pub fn check_package(path: &Path) -> ArchetypeResult<()> {
    let result = PackageValidator::validate_from_path(path)?;
    if !result.valid {
        return Err(ArchetypeError::ValidationFailed(result.errors.join("; ")));
    }
    Ok(())
}

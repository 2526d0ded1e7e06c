//! Error types for package scaffolding and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for archetype operations.
pub type ArchetypeResult<T> = Result<T, ArchetypeError>;

/// Errors that can occur while creating or checking packages.
#[derive(Error, Debug)]
pub enum ArchetypeError {
    #[error("Package already exists at path: {0}")]
    AlreadyExists(PathBuf),

    #[error("Package not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Invalid package descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Package validation failed: {0}")]
    ValidationFailed(String),

    #[error("Resource error: {0}")]
    Resource(#[from] pkgdev_resource::ResourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

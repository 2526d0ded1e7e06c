//! Error types for resource application.

use std::path::PathBuf;
use thiserror::Error;

use crate::manager::ApplyResult;

/// Result type alias for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Errors returned by a whole `apply` call.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("failed to create target directory {path}: {source}")]
    CreateTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more resources failed. `results` holds every outcome, in order.
    #[error("failed to apply resources: {message}")]
    ApplicationFailed {
        message: String,
        results: Vec<ApplyResult>,
    },
}

impl ResourceError {
    /// Per-resource results, when the failure happened after application started.
    pub fn results(&self) -> &[ApplyResult] {
        match self {
            ResourceError::ApplicationFailed { results, .. } => results,
            ResourceError::CreateTarget { .. } => &[],
        }
    }
}

/// Why a single resource could not be materialized.
#[derive(Error, Debug)]
pub enum ResourceFailure {
    #[error("{resource}: fact not provided: {name}")]
    MissingFact { resource: String, name: String },

    #[error("{resource}: static file not found: {name}")]
    MissingStatic { resource: String, name: String },

    #[error("{resource}: path must be relative and stay inside the target directory")]
    InvalidPath { resource: String },

    #[error("{resource}: failed to write {path}: {source}")]
    Write {
        resource: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

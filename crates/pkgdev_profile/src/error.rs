//! Error types for profile operations.

use std::path::PathBuf;
use thiserror::Error;

use pkgdev_resource::ResourceError;

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur during profile operations.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The directory has no `profile.json` marker.
    #[error("not a profile")]
    NotAProfile,

    #[error("profile {0:?} already exists")]
    AlreadyExists(String),

    #[error("cannot remove protected profile {0:?}")]
    ProtectedProfile(String),

    #[error("invalid profile name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("failed to apply resources for profile {name:?}: {source}")]
    ResourceApplication {
        name: String,
        #[source]
        source: ResourceError,
    },

    #[error("{operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration file {path}: {message}")]
    MalformedConfig { path: PathBuf, message: String },

    #[error("malformed profile metadata {path}: {source}")]
    MalformedMetadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error finding profile directory location: {0}")]
    Location(String),

    #[error("failed to check if profile {name:?} exists: {source}")]
    CheckExisting {
        name: String,
        #[source]
        source: Box<ProfileError>,
    },

    #[error("failed to load profile to copy {name:?}: {source}")]
    LoadSource {
        name: String,
        #[source]
        source: Box<ProfileError>,
    },

    #[error("error loading profile {name:?}: {source}")]
    Load {
        name: String,
        #[source]
        source: Box<ProfileError>,
    },

    #[error("failed to copy files from profile {from:?} to {to:?}: {source}")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProfileError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProfileError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// True if this error, or the error it wraps, is [`ProfileError::NotAProfile`].
    pub fn is_not_a_profile(&self) -> bool {
        match self {
            ProfileError::NotAProfile => true,
            ProfileError::CheckExisting { source, .. }
            | ProfileError::LoadSource { source, .. }
            | ProfileError::Load { source, .. } => source.is_not_a_profile(),
            _ => false,
        }
    }
}

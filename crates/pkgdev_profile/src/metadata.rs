//! Profile metadata record (`profile.json`).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

/// Identifying record written when a profile is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub user: String,
    /// Version of pkgdev that created the profile.
    pub version: String,
    pub path: PathBuf,
}

impl Metadata {
    /// Read a metadata file.
    pub fn load(path: &Path) -> ProfileResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ProfileError::io("error reading", path, e))?;
        serde_json::from_str(&content).map_err(|source| ProfileError::MalformedMetadata {
            path: path.to_path_buf(),
            source,
        })
    }
}

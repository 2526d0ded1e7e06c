//! A loaded profile.

use std::path::{Path, PathBuf};

use crate::config::ProfileConfig;
use crate::error::ProfileResult;
use crate::metadata::Metadata;
use crate::resources::PROFILE_META_FILE;

/// A named configuration profile loaded from disk.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Name of the profile, which is also its directory name.
    pub name: String,
    /// Absolute path to the profile directory.
    pub path: PathBuf,
    config: ProfileConfig,
}

impl Profile {
    pub(crate) fn new(name: impl Into<String>, path: impl Into<PathBuf>, config: ProfileConfig) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            config,
        }
    }

    /// Absolute path of a file inside the profile.
    pub fn join<I, P>(&self, names: I) -> PathBuf
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        names
            .into_iter()
            .fold(self.path.clone(), |path, name| path.join(name))
    }

    /// A configuration setting, or `default` if it is not set.
    pub fn config(&self, key: &str, default: &str) -> String {
        self.config.get_or(key, default)
    }

    /// Environment variables passed to service composition tooling.
    pub fn compose_env_vars(&self) -> Vec<String> {
        vec![format!("PROFILE_NAME={}", self.name)]
    }

    /// Read the profile's metadata record.
    pub fn metadata(&self) -> ProfileResult<Metadata> {
        Metadata::load(&self.path.join(PROFILE_META_FILE))
    }
}

//! Location of the profile root directory.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ProfileError, ProfileResult};

/// Resolves where pkgdev keeps its data.
#[derive(Debug, Clone)]
pub struct LocationManager {
    data_home: PathBuf,
}

impl LocationManager {
    /// Environment variable overriding the data directory.
    pub const DATA_HOME_ENV: &'static str = "PKGDEV_DATA_HOME";

    /// Directory name under the user's home when no override is set.
    pub const DEFAULT_DIR: &'static str = ".pkgdev";

    /// Resolve from `PKGDEV_DATA_HOME`, or `~/.pkgdev`.
    pub fn new() -> ProfileResult<Self> {
        let data_home = match env::var_os(Self::DATA_HOME_ENV).filter(|v| !v.is_empty()) {
            Some(value) => {
                let path = PathBuf::from(value);
                if !path.is_absolute() {
                    return Err(ProfileError::Location(format!(
                        "{} must be an absolute path, got {:?}",
                        Self::DATA_HOME_ENV,
                        path
                    )));
                }
                path
            }
            None => dirs::home_dir()
                .ok_or_else(|| ProfileError::Location("cannot determine home directory".to_string()))?
                .join(Self::DEFAULT_DIR),
        };

        debug!("Using data home {:?}", data_home);
        Ok(Self { data_home })
    }

    pub fn with_data_home(data_home: impl Into<PathBuf>) -> Self {
        Self {
            data_home: data_home.into(),
        }
    }

    /// Directory containing all profiles.
    pub fn profile_dir(&self) -> PathBuf {
        self.data_home.join("profiles")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_dir() {
        let loc = LocationManager::with_data_home("/opt/pkgdev");
        assert_eq!(loc.profile_dir(), PathBuf::from("/opt/pkgdev/profiles"));
    }
}

//! Profile configuration (`config.yml`).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{ProfileError, ProfileResult};

/// Key/value settings of a profile.
///
/// Keys may be nested in the YAML document and are looked up by dotted path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileConfig {
    values: Mapping,
}

impl ProfileConfig {
    /// Load the configuration file at `path`.
    ///
    /// A missing file yields an empty configuration.
    pub fn load(path: &Path) -> ProfileResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No configuration file at {:?}", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(ProfileError::io("error reading", path, e)),
        };

        Self::parse(&content).map_err(|message| ProfileError::MalformedConfig {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration from YAML text. The document must be a mapping.
    pub fn parse(content: &str) -> Result<Self, String> {
        let has_content = content
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_content {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(values) => Ok(Self { values }),
            _ => Err("top level must be a mapping of settings".to_string()),
        }
    }

    /// Look up a setting. Non-scalar values are treated as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = self
            .values
            .get(key)
            .or_else(|| self.lookup_dotted(key))?;

        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Look up a setting, falling back to `default`.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn lookup_dotted(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let mut current = self.values.get(segments.next()?)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }
}

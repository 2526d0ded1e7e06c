//! Profile lifecycle: create, load, list, delete.

use std::env;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};
use walkdir::WalkDir;

use pkgdev_resource::{Facts, ResourceManager};

use crate::config::ProfileConfig;
use crate::error::{ProfileError, ProfileResult};
use crate::location::LocationManager;
use crate::metadata::Metadata;
use crate::profile::Profile;
use crate::resources::{DEFAULT_PROFILE, PROFILE_CONFIG_FILE, PROFILE_RESOURCES, STATIC_SOURCE};
use crate::validator::is_profile_dir;

/// Options for creating a profile.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Root directory to create the profile in. Defaults to the manager's root.
    pub root_path: Option<PathBuf>,
    /// Profile name. Defaults to [`DEFAULT_PROFILE`] when empty.
    pub name: String,
    /// Profile to copy from.
    pub from_profile: Option<String>,
    /// Skip the existence check and overwrite bundled files.
    pub overwrite_existing: bool,
}

impl CreateOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn root_path(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_path = Some(root.into());
        self
    }

    /// Inherit from another profile.
    ///
    /// Inheriting from [`DEFAULT_PROFILE`] means "start from the bundled
    /// resources". The contents of the user's default profile are not copied.
    pub fn from_profile(mut self, from: impl Into<String>) -> Self {
        self.from_profile = Some(from.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite_existing = overwrite;
        self
    }
}

/// Manages the profiles under one root directory.
#[derive(Debug, Clone)]
pub struct ProfileManager {
    root: PathBuf,
}

impl ProfileManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_locations(locations: &LocationManager) -> Self {
        Self::new(locations.profile_dir())
    }

    /// Manager for the default profile root.
    pub fn discover() -> ProfileResult<Self> {
        Ok(Self::from_locations(&LocationManager::new()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a profile and return its directory.
    pub fn create(&self, options: CreateOptions) -> ProfileResult<PathBuf> {
        // An empty root means "not given", never the current directory.
        let root = options
            .root_path
            .filter(|root| !root.as_os_str().is_empty())
            .unwrap_or_else(|| self.root.clone());
        let name = if options.name.is_empty() {
            DEFAULT_PROFILE.to_string()
        } else {
            options.name
        };
        validate_name(&name)?;

        if !options.overwrite_existing {
            match Self::load_from(&root, &name) {
                Ok(_) => return Err(ProfileError::AlreadyExists(name)),
                Err(ProfileError::NotAProfile) => {}
                Err(e) => {
                    return Err(ProfileError::CheckExisting {
                        name,
                        source: Box::new(e),
                    })
                }
            }
        }

        match options.from_profile.as_deref() {
            Some(from) if !from.is_empty() && from != DEFAULT_PROFILE => {
                create_profile_from(&root, &name, from)
            }
            _ => create_profile(&root, &name),
        }
    }

    /// Create the default profile if it does not exist yet.
    ///
    /// Returns `true` when the profile was created.
    pub fn ensure_default(&self) -> ProfileResult<bool> {
        match self.load(DEFAULT_PROFILE) {
            Ok(_) => Ok(false),
            Err(ProfileError::NotAProfile) => {
                self.create(CreateOptions::new(DEFAULT_PROFILE))?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    /// Load a profile from the manager's root.
    pub fn load(&self, name: &str) -> ProfileResult<Profile> {
        Self::load_from(&self.root, name)
    }

    /// Load a profile from an explicit root.
    ///
    /// Fails with [`ProfileError::NotAProfile`] when the directory has no marker.
    pub fn load_from(root: &Path, name: &str) -> ProfileResult<Profile> {
        validate_name(name)?;
        let profile_path = root.join(name);

        if !is_profile_dir(&profile_path)? {
            return Err(ProfileError::NotAProfile);
        }

        let config = ProfileConfig::load(&profile_path.join(PROFILE_CONFIG_FILE))?;
        debug!("Loaded profile {:?} from {:?}", name, profile_path);

        Ok(Profile::new(name, profile_path, config))
    }

    /// Metadata of every profile in the manager's root.
    pub fn list(&self) -> ProfileResult<Vec<Metadata>> {
        Self::list_in(&self.root)
    }

    /// Metadata of every profile in `root`, ordered by directory name.
    ///
    /// Subdirectories without a marker, or whose name is not a valid profile
    /// name, are skipped. A missing root yields no profiles.
    pub fn list_in(root: &Path) -> ProfileResult<Vec<Metadata>> {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ProfileError::io("error reading from directory", root, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ProfileError::io("error reading from directory", root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| ProfileError::io("error stat", entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    debug!("Skipping {:?}: not a UTF-8 name", raw);
                    continue;
                }
            };
            if let Err(e) = validate_name(&name) {
                debug!("Skipping {:?}: {}", name, e);
                continue;
            }
            names.push(name);
        }
        names.sort();

        let mut profiles = Vec::new();
        for name in names {
            let profile = match Self::load_from(root, &name) {
                Ok(profile) => profile,
                Err(ProfileError::NotAProfile) => {
                    debug!("Skipping {:?}: not a profile", name);
                    continue;
                }
                Err(e) => {
                    return Err(ProfileError::Load {
                        name,
                        source: Box::new(e),
                    })
                }
            };
            profiles.push(profile.metadata()?);
        }

        Ok(profiles)
    }

    /// Delete a profile. Deleting a profile that does not exist succeeds.
    pub fn delete(&self, name: &str) -> ProfileResult<()> {
        if name == DEFAULT_PROFILE {
            return Err(ProfileError::ProtectedProfile(name.to_string()));
        }
        validate_name(name)?;

        let path = self.root.join(name);
        match fs::remove_dir_all(&path) {
            Ok(()) => {
                info!("Deleted profile {:?}", name);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Profile {:?} does not exist, nothing to delete", name);
                Ok(())
            }
            Err(e) => Err(ProfileError::io("error removing", path, e)),
        }
    }
}

fn create_profile(root: &Path, name: &str) -> ProfileResult<PathBuf> {
    let profile_dir = root.join(name);
    info!("Creating profile {:?} in {:?}", name, profile_dir);

    let manager = ResourceManager::new(profile_facts(name, &profile_dir)).with_source(STATIC_SOURCE);
    manager
        .apply(&profile_dir, PROFILE_RESOURCES)
        .map_err(|source| ProfileError::ResourceApplication {
            name: name.to_string(),
            source,
        })?;

    Ok(profile_dir)
}

fn create_profile_from(root: &Path, name: &str, from: &str) -> ProfileResult<PathBuf> {
    let source = ProfileManager::load_from(root, from).map_err(|e| ProfileError::LoadSource {
        name: from.to_string(),
        source: Box::new(e),
    })?;

    let profile_dir = root.join(name);
    if source.path != profile_dir {
        info!("Copying profile {:?} to {:?}", from, name);
        copy_all(&source.path, &profile_dir).map_err(|e| ProfileError::Copy {
            from: from.to_string(),
            to: name.to_string(),
            source: e,
        })?;
    }

    // Stamp bundled resources over the copy so it is valid on its own.
    create_profile(root, name)
}

fn profile_facts(name: &str, profile_dir: &Path) -> Facts {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    [
        ("profile_name", name.to_string()),
        ("profile_path", profile_dir.to_string_lossy().into_owned()),
        ("creation_date", Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        ("user", user),
        ("version", env!("CARGO_PKG_VERSION").to_string()),
    ]
    .into_iter()
    .map(|(key, value)| (key, json_escape(&value)))
    .collect()
}

/// Escape a value for use inside a JSON string literal.
fn json_escape(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Recursively copy the contents of `from` into `to`. Symlinks are not followed.
fn copy_all(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in WalkDir::new(from).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| io::Error::new(ErrorKind::Other, e))?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
        } else {
            debug!("Skipping {:?}: not a regular file", entry.path());
        }
    }

    Ok(())
}

/// Profile names are single, plain directory names.
fn validate_name(name: &str) -> ProfileResult<()> {
    let invalid = |reason| ProfileError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(invalid("must be a single directory name")),
    }
}

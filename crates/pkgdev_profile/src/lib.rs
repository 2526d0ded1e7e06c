//! # pkgdev_profile
//!
//! Named configuration profiles for pkgdev.
//!
//! A profile is a directory under the profile root that contains a
//! `profile.json` metadata marker. Profiles are created from a bundled set of
//! resources, or inherited from another profile by copying it and stamping
//! the bundled resources on top. The filesystem is the only source of truth:
//! nothing is cached between calls.
//!
//! ```text
//! <root>/
//!   <profile-name>/
//!     profile.json          marker + metadata
//!     config.yml.example    shipped example, never loaded
//!     config.yml            optional user configuration
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use pkgdev_profile::{CreateOptions, ProfileManager};
//!
//! let manager = ProfileManager::new("/home/dev/.pkgdev/profiles");
//! manager.create(CreateOptions::new("staging").from_profile("default")).unwrap();
//!
//! let profile = manager.load("staging").unwrap();
//! let level = profile.config("stack.log_level", "info");
//! ```

pub mod config;
pub mod error;
pub mod location;
pub mod manager;
pub mod metadata;
pub mod profile;
pub mod resources;
pub mod validator;

pub use config::ProfileConfig;
pub use error::{ProfileError, ProfileResult};
pub use location::LocationManager;
pub use manager::{CreateOptions, ProfileManager};
pub use metadata::Metadata;
pub use profile::Profile;
pub use resources::{
    CONFIG_EXAMPLE_FILE, DEFAULT_PROFILE, PROFILE_CONFIG_FILE, PROFILE_META_FILE,
    PROFILE_RESOURCES, STATIC_SOURCE,
};
pub use validator::is_profile_dir;

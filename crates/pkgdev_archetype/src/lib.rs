//! # pkgdev_archetype
//!
//! Package scaffolding and validation for pkgdev.
//!
//! A [`PackageDescriptor`] is turned into a package directory containing a
//! manifest, a changelog and a README. [`PackageValidator`] checks a package
//! directory and reports human-readable errors and warnings.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pkgdev_archetype::{check_package, create_package, PackageDescriptor};
//! use std::path::Path;
//!
//! let mut descriptor = PackageDescriptor::default();
//! descriptor.manifest.name = "nginx".to_string();
//! descriptor.manifest.title = "Nginx".to_string();
//! descriptor.manifest.version = "0.1.0".to_string();
//!
//! let package_dir = create_package(&descriptor, Path::new("/tmp/packages")).unwrap();
//! check_package(&package_dir).unwrap();
//! ```

pub mod error;
pub mod models;
pub mod package;
pub mod validator;

pub use error::{ArchetypeError, ArchetypeResult};
pub use models::{
    Conditions, ElasticConditions, KibanaConditions, Owner, PackageDescriptor, PackageManifest,
};
pub use package::{create_package, PACKAGE_RESOURCES};
pub use validator::{check_package, PackageValidator, ValidationResult};

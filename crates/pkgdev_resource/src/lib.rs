//! # pkgdev_resource
//!
//! Declarative file resources for pkgdev.
//!
//! A resource describes one file to materialize under a target directory. Its
//! content is either an inline template or a named file bundled at build time
//! in a [`StaticSource`]. Both may contain `{{fact}}` placeholders that are
//! substituted from the [`Facts`] given to the [`ResourceManager`].
//!
//! Application is best-effort: every resource is attempted, every outcome is
//! reported, and the call fails as a whole if any resource failed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pkgdev_resource::{Facts, Resource, ResourceManager};
//! use std::path::Path;
//!
//! static RESOURCES: &[Resource] = &[Resource::template("hello.txt", "Hello {{name}}\n")];
//!
//! let manager = ResourceManager::new(Facts::new().with("name", "world"));
//! let results = manager.apply(Path::new("/tmp/out"), RESOURCES).unwrap();
//! assert!(results.iter().all(|r| r.is_ok()));
//! ```

pub mod error;
pub mod facts;
pub mod manager;
pub mod renderer;
pub mod resource;

pub use error::{ResourceError, ResourceFailure, ResourceResult};
pub use facts::Facts;
pub use manager::{ApplyResult, ResourceManager};
pub use renderer::FactRenderer;
pub use resource::{ContentSource, Resource, StaticFile, StaticSource};

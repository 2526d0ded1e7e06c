//! Package scaffolding.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::info;

use pkgdev_resource::{Resource, ResourceManager};

use crate::error::{ArchetypeError, ArchetypeResult};
use crate::models::PackageDescriptor;
use crate::validator::MANIFEST_FILE;

const CHANGELOG_TEMPLATE: &str = r#"# newer versions go on top
- version: "{{version}}"
  changes:
    - description: Initial draft of the package
      type: enhancement
      link: https://github.com/{{owner}}/{{name}}/pull/1
"#;

const README_TEMPLATE: &str = r#"# {{title}}

{{description}}

## Data streams

This {{type}} package does not define any data streams yet.
"#;

/// Template files written for every new package. `manifest.yml` is
/// serialized from the descriptor separately.
pub static PACKAGE_RESOURCES: &[Resource] = &[
    Resource::template("changelog.yml", CHANGELOG_TEMPLATE),
    Resource::template("docs/README.md", README_TEMPLATE),
];

/// Create a package under `parent_dir` and return its directory.
///
/// The descriptor is written as given; use [`crate::PackageValidator`] to check it.
pub fn create_package(descriptor: &PackageDescriptor, parent_dir: &Path) -> ArchetypeResult<PathBuf> {
    let name = &descriptor.manifest.name;
    let mut components = Path::new(name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        return Err(ArchetypeError::InvalidDescriptor(format!(
            "package name {:?} is not a valid directory name",
            name
        )));
    }

    let package_dir = parent_dir.join(name);
    if package_dir.exists() {
        return Err(ArchetypeError::AlreadyExists(package_dir));
    }

    info!("Creating package {} in {:?}", name, package_dir);

    ResourceManager::new(descriptor.facts()).apply(&package_dir, PACKAGE_RESOURCES)?;

    let manifest = serde_yaml::to_string(&descriptor.manifest)?;
    fs::write(package_dir.join(MANIFEST_FILE), manifest)?;

    Ok(package_dir)
}

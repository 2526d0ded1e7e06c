//! Package descriptor data model.

use serde::{Deserialize, Serialize};

use pkgdev_resource::Facts;

fn default_format_version() -> String {
    "3.0.0".to_string()
}

/// Kibana compatibility constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KibanaConditions {
    pub version: String,
}

/// Elastic subscription requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticConditions {
    pub subscription: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    pub kibana: KibanaConditions,
    pub elastic: ElasticConditions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    pub github: String,
}

/// Package manifest, stored as `manifest.yml`.
///
/// Missing fields deserialize as empty so validation can report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    pub format_version: String,
    pub name: String,
    pub title: String,
    pub version: String,
    pub description: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub license: String,
    pub categories: Vec<String>,
    pub conditions: Conditions,
    pub owner: Owner,
}

impl Default for PackageManifest {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            name: String::new(),
            title: String::new(),
            version: String::new(),
            description: String::new(),
            package_type: "integration".to_string(),
            license: "basic".to_string(),
            categories: Vec::new(),
            conditions: Conditions::default(),
            owner: Owner::default(),
        }
    }
}

/// Everything needed to scaffold a package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub manifest: PackageManifest,
}

impl PackageDescriptor {
    pub fn new(manifest: PackageManifest) -> Self {
        Self { manifest }
    }

    /// Facts used to render the package's template files.
    pub fn facts(&self) -> Facts {
        let manifest = &self.manifest;
        Facts::new()
            .with("name", &manifest.name)
            .with("title", &manifest.title)
            .with("version", &manifest.version)
            .with("description", &manifest.description)
            .with("type", &manifest.package_type)
            .with("owner", &manifest.owner.github)
    }
}

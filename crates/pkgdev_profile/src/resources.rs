//! Bundled resources that make up a fresh profile.

use pkgdev_resource::{Resource, StaticFile, StaticSource};

/// Metadata marker; its presence makes a directory a profile.
pub const PROFILE_META_FILE: &str = "profile.json";

/// Optional user configuration.
pub const PROFILE_CONFIG_FILE: &str = "config.yml";

/// Shipped configuration example. Never loaded as configuration.
pub const CONFIG_EXAMPLE_FILE: &str = "config.yml.example";

/// Name of the bootstrap profile.
pub const DEFAULT_PROFILE: &str = "default";

const PROFILE_METADATA_TEMPLATE: &str = r#"{
  "name": "{{profile_name}}",
  "date_created": "{{creation_date}}",
  "user": "{{user}}",
  "version": "{{version}}",
  "path": "{{profile_path}}"
}
"#;

const STATIC_FILES: &[StaticFile] = &[StaticFile {
    name: "_static/config.yml.example",
    content: include_str!("../static/config.yml.example"),
}];

/// Bundled files referenced by [`PROFILE_RESOURCES`].
pub static STATIC_SOURCE: StaticSource = StaticSource::new(STATIC_FILES);

/// Resources applied to every created profile.
pub static PROFILE_RESOURCES: &[Resource] = &[
    Resource::template(PROFILE_META_FILE, PROFILE_METADATA_TEMPLATE),
    Resource::from_static(CONFIG_EXAMPLE_FILE, "_static/config.yml.example"),
];

//! Resource application.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ResourceError, ResourceFailure, ResourceResult};
use crate::facts::Facts;
use crate::renderer::FactRenderer;
use crate::resource::{ContentSource, Resource, StaticSource};

/// Outcome of applying one resource.
#[derive(Debug)]
pub struct ApplyResult {
    /// Resource path, relative to the target directory.
    pub path: PathBuf,
    pub error: Option<ResourceFailure>,
}

impl ApplyResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Failure message, if the resource failed.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

/// Materializes resources under a target directory.
pub struct ResourceManager {
    facts: Facts,
    source: StaticSource,
    renderer: FactRenderer,
}

impl ResourceManager {
    pub fn new(facts: Facts) -> Self {
        Self {
            facts,
            source: StaticSource::default(),
            renderer: FactRenderer::new(),
        }
    }

    /// Register the bundled files that `ContentSource::Static` resources refer to.
    pub fn with_source(mut self, source: StaticSource) -> Self {
        self.source = source;
        self
    }

    /// Apply resources to `target`, in order.
    ///
    /// The target directory is created first. Each resource is attempted
    /// regardless of earlier failures. Existing files are overwritten.
    pub fn apply(&self, target: &Path, resources: &[Resource]) -> ResourceResult<Vec<ApplyResult>> {
        fs::create_dir_all(target).map_err(|source| ResourceError::CreateTarget {
            path: target.to_path_buf(),
            source,
        })?;

        info!("Applying {} resources to {:?}", resources.len(), target);

        let results: Vec<ApplyResult> = resources
            .iter()
            .map(|resource| {
                let error = self.apply_one(target, resource).err();
                match &error {
                    Some(e) => warn!("Resource failed: {}", e),
                    None => debug!("Applied: {}", resource.path),
                }
                ApplyResult {
                    path: PathBuf::from(resource.path),
                    error,
                }
            })
            .collect();

        let failures: Vec<String> = results.iter().filter_map(ApplyResult::message).collect();
        if !failures.is_empty() {
            return Err(ResourceError::ApplicationFailed {
                message: failures.join(", "),
                results,
            });
        }

        Ok(results)
    }

    fn apply_one(&self, target: &Path, resource: &Resource) -> Result<(), ResourceFailure> {
        let relative = Path::new(resource.path);
        if !is_contained(relative) {
            return Err(ResourceFailure::InvalidPath {
                resource: resource.path.to_string(),
            });
        }

        let template = match resource.content {
            ContentSource::Template(content) => content,
            ContentSource::Static(name) => {
                self.source
                    .file(name)
                    .ok_or_else(|| ResourceFailure::MissingStatic {
                        resource: resource.path.to_string(),
                        name: name.to_string(),
                    })?
            }
        };

        let rendered = self
            .renderer
            .render(template, &self.facts)
            .map_err(|name| ResourceFailure::MissingFact {
                resource: resource.path.to_string(),
                name,
            })?;

        let path = target.join(relative);
        let write_error = |source| ResourceFailure::Write {
            resource: resource.path.to_string(),
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&path, rendered).map_err(write_error)?;

        Ok(())
    }
}

/// True for non-empty relative paths that cannot climb out of their base.
fn is_contained(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_contained() {
        assert!(is_contained(Path::new("profile.json")));
        assert!(is_contained(Path::new("nested/dir/file.yml")));
        assert!(!is_contained(Path::new("")));
        assert!(!is_contained(Path::new("../escape")));
        assert!(!is_contained(Path::new("/etc/passwd")));
    }
}

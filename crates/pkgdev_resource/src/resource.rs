//! Resource descriptors and bundled static files.

/// Where the content of a resource comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Inline template text.
    Template(&'static str),
    /// Name of a file in the manager's [`StaticSource`].
    Static(&'static str),
}

/// One file to materialize, relative to the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub path: &'static str,
    pub content: ContentSource,
}

impl Resource {
    pub const fn template(path: &'static str, content: &'static str) -> Self {
        Self {
            path,
            content: ContentSource::Template(content),
        }
    }

    pub const fn from_static(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            content: ContentSource::Static(name),
        }
    }
}

/// A file bundled into the binary, usually with `include_str!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFile {
    pub name: &'static str,
    pub content: &'static str,
}

/// Read-only table of bundled files, looked up by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource {
    files: &'static [StaticFile],
}

impl StaticSource {
    pub const fn new(files: &'static [StaticFile]) -> Self {
        Self { files }
    }

    pub fn file(&self, name: &str) -> Option<&'static str> {
        self.files
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FILES: &[StaticFile] = &[StaticFile {
        name: "_static/a.txt",
        content: "a",
    }];

    #[test]
    fn test_static_source_lookup() {
        let source = StaticSource::new(FILES);
        assert_eq!(source.file("_static/a.txt"), Some("a"));
        assert_eq!(source.file("_static/b.txt"), None);
    }
}

//! Fact substitution in template content.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::facts::Facts;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Match {{fact_name}}, with optional inner whitespace
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes `{{fact}}` placeholders with fact values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactRenderer;

impl FactRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render content by replacing every placeholder.
    ///
    /// Facts that the content never mentions are ignored. A placeholder
    /// without a matching fact fails the render; the error carries the name
    /// of the first such placeholder.
    pub fn render(&self, content: &str, facts: &Facts) -> Result<String, String> {
        let mut missing: Option<String> = None;
        let rendered = placeholder_pattern().replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match facts.get(name) {
                Some(value) => value.to_string(),
                None => {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(name) => Err(name),
            None => Ok(rendered.into_owned()),
        }
    }
}

//! Declaration template
//!
//! The text a generated `.d.ts` file is built from. Two placeholders are
//! recognised; only the first occurrence of each is substituted.

use crate::domain::value_objects::Fingerprint;

/// Template shipped with the binary
pub const DEFAULT_TEMPLATE: &str = include_str!("../../../templates/d.ts.template");

/// Template text with `{{hash}}` and `{{typeDefinition}}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionTemplate {
    text: String,
}

impl DefinitionTemplate {
    pub const HASH_PLACEHOLDER: &'static str = "{{hash}}";
    pub const BODY_PLACEHOLDER: &'static str = "{{typeDefinition}}";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the filled template will carry a recoverable `hash:<digest>` marker.
    ///
    /// Without it every run regenerates every file.
    pub fn embeds_marker(&self) -> bool {
        let marker = format!("{}{}", Fingerprint::MARKER_PREFIX, Self::HASH_PLACEHOLDER);
        self.text.contains(&marker)
    }

    /// Substitute the fingerprint, then the rendered body.
    pub fn fill(&self, fingerprint: &Fingerprint, body: &str) -> String {
        self.text
            .replacen(Self::HASH_PLACEHOLDER, fingerprint.as_str(), 1)
            .replacen(Self::BODY_PLACEHOLDER, body, 1)
    }
}

impl Default for DefinitionTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

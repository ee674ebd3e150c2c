//! Selector Extractor Domain Service
//!
//! Pulls class selectors out of stylesheet text with a flat regex scan.
//! There is no brace or nesting awareness: a `.name` token inside a comment
//! or a string literal is picked up as well.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::ClassNameSet;

/// `.` followed by an identifier. A leading digit never matches, so decimal
/// literals such as `2.5rem` are not mistaken for selectors.
static CLASS_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(-?[A-Za-z_][A-Za-z0-9_-]*)").expect("Invalid regex pattern for class selector")
});

/// Extracts class names from stylesheet text
pub trait ClassNameExtractor {
    fn extract(&self, text: &str) -> ClassNameSet;
}

/// Regex based extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexClassExtractor;

impl RegexClassExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ClassNameExtractor for RegexClassExtractor {
    fn extract(&self, text: &str) -> ClassNameSet {
        CLASS_SELECTOR
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

/// Convenience wrapper around [`RegexClassExtractor`]
pub fn extract_class_names(text: &str) -> ClassNameSet {
    RegexClassExtractor.extract(text)
}

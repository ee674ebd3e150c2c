//! Definition Renderer Domain Service
//!
//! Turns a class name set into the body of a TypeScript typed dictionary.

use crate::domain::value_objects::ClassNameSet;

/// Renders the type body substituted for `{{typeDefinition}}`
pub trait DefinitionRenderer {
    fn render(&self, classes: &ClassNameSet) -> String;
}

/// TypeScript object-type renderer
///
/// One tab-indented `key: string;` line per class. Names containing a hyphen
/// are not valid bare identifiers, so they are emitted as quoted keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    fn property_key(name: &str) -> String {
        if name.contains('-') {
            format!("'{}'", name)
        } else {
            name.to_string()
        }
    }
}

impl DefinitionRenderer for TypeScriptRenderer {
    fn render(&self, classes: &ClassNameSet) -> String {
        let mut result = String::from("{\n");
        for name in classes.iter() {
            result.push('\t');
            result.push_str(&Self::property_key(name));
            result.push_str(": string;\n");
        }
        result.push('}');
        result
    }
}

/// Convenience wrapper around [`TypeScriptRenderer`]
pub fn render_definition(classes: &ClassNameSet) -> String {
    TypeScriptRenderer.render(classes)
}

//! Template loading
//!
//! Reads a custom declaration template from disk, falling back to the
//! template compiled into the binary.

use std::path::Path;

use tracing::warn;

use crate::domain::value_objects::DefinitionTemplate;
use crate::error::{CssModError, CssModResult};

/// Load the template at `path`, or the built-in one when `path` is `None`
pub fn load_template(path: Option<&Path>) -> CssModResult<DefinitionTemplate> {
    let Some(path) = path else {
        return Ok(DefinitionTemplate::default());
    };

    let text = std::fs::read_to_string(path).map_err(|e| CssModError::Template {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let template = DefinitionTemplate::new(text);

    if !template.embeds_marker() {
        warn!(
            path = %path.display(),
            "template has no 'hash:{{{{hash}}}}' marker; every run will regenerate all files"
        );
    }
    if !template.as_str().contains(DefinitionTemplate::BODY_PLACEHOLDER) {
        warn!(path = %path.display(), "template has no '{{{{typeDefinition}}}}' placeholder");
    }

    Ok(template)
}

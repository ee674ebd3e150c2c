//! Domain Services
//!
//! Stateless services implementing the pure parts of the pipeline.

mod extractor;
mod fingerprinter;
mod renderer;

pub use extractor::{extract_class_names, ClassNameExtractor, RegexClassExtractor};
pub use fingerprinter::{Fingerprinter, Sha256Fingerprinter};
pub use renderer::{render_definition, DefinitionRenderer, TypeScriptRenderer};

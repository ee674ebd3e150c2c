//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod class_names;
mod fingerprint;
mod template;

pub use class_names::ClassNameSet;
pub use fingerprint::Fingerprint;
pub use template::{DefinitionTemplate, DEFAULT_TEMPLATE};

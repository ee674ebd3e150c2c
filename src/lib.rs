//! cssmod-types - TypeScript declarations for CSS modules
//!
//! Scans a directory tree for CSS-module stylesheets (`*.module.scss`),
//! extracts the class selectors each one defines and writes a companion
//! `<file>.d.ts` describing them as a typed dictionary. A content fingerprint
//! embedded in every generated file lets later runs skip unchanged sources.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::generate::run;
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase, LocalGenerateUseCase};
pub use config::Config;
pub use domain::policies::{artifact_path, Decision, InvalidationPolicy, ModuleConvention};
pub use domain::ports::{FileSystem, FileWalker};
pub use domain::services::{
    extract_class_names, render_definition, ClassNameExtractor, DefinitionRenderer, Fingerprinter,
    RegexClassExtractor, Sha256Fingerprinter, TypeScriptRenderer,
};
pub use domain::value_objects::{ClassNameSet, DefinitionTemplate, Fingerprint};
pub use error::{CssModError, CssModResult};
pub use infrastructure::{LocalFs, RecursiveWalker};

//! Generate Use Case
//!
//! Orchestrates declaration file generation.
//!
//! This module handles:
//! - Walking the root path for candidate stylesheets
//! - Fingerprinting each candidate and consulting the invalidation policy
//! - Extracting, rendering and writing declaration files that are stale

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::{GenerateResult, SkippedFile};
pub use use_case::{run, GenerateUseCase, LocalGenerateUseCase};

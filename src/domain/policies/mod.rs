//! Domain Policies
//!
//! Business rules that govern which files get regenerated.

mod invalidation;

pub use invalidation::{artifact_path, Decision, InvalidationPolicy, ModuleConvention, ARTIFACT_SUFFIX};

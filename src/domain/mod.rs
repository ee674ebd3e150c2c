//! Domain Layer
//!
//! Pure logic of the generator: extraction, rendering, fingerprints and the
//! staleness policy.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Fingerprint, ClassNameSet, DefinitionTemplate)
//! - `services/` - Domain services (extractor, renderer, fingerprinter)
//! - `policies/` - Business rules (InvalidationPolicy, ModuleConvention)
//! - `ports/` - Interface definitions for infrastructure
//!
//! The policy is the only piece that reads from disk, and it does so through
//! the `FileSystem` port.

pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

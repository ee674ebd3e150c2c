//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod walker;

pub use file_system::{EntryKind, FileSystem, FsError, FsResult};
pub use walker::FileWalker;

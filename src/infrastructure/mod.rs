//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Mock)
//! - `walker` - Recursive candidate discovery
//! - `template` - Loading custom declaration templates

pub mod fs;
pub mod template;
pub mod walker;

// Re-export for convenience
pub use fs::LocalFs;
pub use template::load_template;
pub use walker::RecursiveWalker;

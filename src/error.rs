//! Error types for cssmod-types
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for cssmod-types operations
pub type CssModResult<T> = Result<T, CssModError>;

/// Main error type for cssmod-types operations
#[derive(Error, Debug)]
pub enum CssModError {
    /// Root path handed to the walker does not exist
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    /// Error raised by a `FileSystem` port implementation
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Custom template could not be loaded
    #[error("cannot load template {path}: {message}")]
    Template { path: PathBuf, message: String },

    /// Unreadable or invalid configuration file
    #[error("config error in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

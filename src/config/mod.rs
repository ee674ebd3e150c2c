//! Configuration module for cssmod-types
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CSSMOD_*)
//! 3. Config file (`--config`, else ./cssmod.toml, else ~/.config/cssmod-types/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load, load_or_default, load_with_warnings, with_env_overrides, with_overrides_from,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, ConfigWarning, GenerateConfig};

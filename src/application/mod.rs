//! Application Layer
//!
//! Use cases orchestrating domain services and infrastructure ports.

pub mod generate;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase, LocalGenerateUseCase};

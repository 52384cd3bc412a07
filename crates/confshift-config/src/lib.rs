//! Configuration conversion for confshift
//!
//! This crate loads YAML and INI-style files into one canonical nested
//! configuration and re-emits it as JSON, flattened `.env` text, or
//! environment variables.

pub mod emit;
pub mod flatten;
pub mod format;
pub mod ini;
pub mod store;
pub mod yaml;

// Re-export main types
pub use emit::{EnvWriter, MemoryEnv, ProcessEnv};
pub use flatten::{flatten, flatten_with, CollisionPolicy, FlatConfig, FlattenOptions};
pub use format::ConfigFormat;
pub use store::ConfigurationStore;

use confshift_core::error::ConfShiftError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfShiftError>;

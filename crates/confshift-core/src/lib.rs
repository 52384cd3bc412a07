//! # confshift-core
//!
//! Core types and utilities shared across all confshift crates.
//!
//! This crate provides:
//! - ConfigValue, the canonical nested configuration model
//! - ConfShiftError enum for unified error handling
//! - Path helpers used for format detection
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Canonical configuration types (ConfigValue, ConfigMap)
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfShiftError, ConfShiftResult, Location};
pub use types::{ConfigMap, ConfigValue};

//! Utility functions and helpers.

pub mod path;

pub use path::get_extension;

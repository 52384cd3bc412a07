//! Core data types shared by the loaders and emitters.

pub mod value;

pub use value::{ConfigMap, ConfigValue};

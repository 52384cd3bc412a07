//! Emitters converting the canonical configuration into external forms.
//!
//! All emitters are stateless and read-only with respect to the
//! configuration they are given.

pub mod env;
pub mod json;

pub use env::{render_env_file, write_env, write_env_file, EnvWriter, MemoryEnv, ProcessEnv};
pub use json::{to_json_string, write_json};

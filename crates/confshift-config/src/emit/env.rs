//! Environment emitters: `.env` files and environment variables.
//!
//! Env-file lines are written as `KEY=VALUE` with no quoting or escaping, so
//! values containing newlines or `=` produce lines other tools may misread.

use camino::Utf8Path;
use confshift_core::{ConfShiftError, ConfigValue};
use indexmap::IndexMap;
use tracing::{debug, error, info};

use crate::flatten::{flatten, FlattenOptions};
use crate::ConfigResult;

/// Destination for environment variables.
///
/// [`ProcessEnv`] mutates the real process environment; [`MemoryEnv`] keeps
/// the variables in memory so callers can inspect them in isolation.
pub trait EnvWriter {
    fn set_var(&mut self, key: &str, value: &str) -> ConfigResult<()>;
}

/// Writes into the environment of the current process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvWriter for ProcessEnv {
    fn set_var(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        validate_var(key, value)?;
        std::env::set_var(key, value);
        Ok(())
    }
}

/// Records variables in insertion order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: IndexMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn vars(&self) -> &IndexMap<String, String> {
        &self.vars
    }

    pub fn into_vars(self) -> IndexMap<String, String> {
        self.vars
    }
}

impl EnvWriter for MemoryEnv {
    fn set_var(&mut self, key: &str, value: &str) -> ConfigResult<()> {
        validate_var(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reject names and values the platform environment cannot hold
fn validate_var(key: &str, value: &str) -> ConfigResult<()> {
    let reason = if key.is_empty() {
        Some("name is empty")
    } else if key.contains('=') {
        Some("name contains '='")
    } else if key.contains('\0') {
        Some("name contains a NUL byte")
    } else if value.contains('\0') {
        Some("value contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfShiftError::EnvWrite {
            key: key.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Set one variable per top-level key, in mapping order.
///
/// Nested values are not flattened; they are written as their text form.
/// Variables set before a failure stay set.
pub fn write_env<W: EnvWriter + ?Sized>(config: &ConfigValue, writer: &mut W) -> ConfigResult<()> {
    let map = config.as_map().ok_or_else(|| {
        let err = ConfShiftError::not_a_mapping("environment export", config.type_name());
        error!("Failed to write configuration to environment variables: {}", err);
        err
    })?;

    for (key, value) in map {
        writer.set_var(key, &value.to_text()).map_err(|e| {
            error!("Failed to write configuration to environment variables: {}", e);
            e
        })?;
        debug!("Set environment variable {}", key);
    }

    info!("Successfully written configuration to environment variables");
    Ok(())
}

/// Render the flattened configuration as `.env` text, one line per entry
pub fn render_env_file(config: &ConfigValue, options: &FlattenOptions) -> ConfigResult<String> {
    let flat = flatten(config, options)?;

    let mut out = String::new();
    for (key, value) in &flat {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }

    Ok(out)
}

/// Write the flattened configuration to a `.env` file
pub fn write_env_file(config: &ConfigValue, path: &Utf8Path) -> ConfigResult<()> {
    let content = render_env_file(config, &FlattenOptions::default()).map_err(|e| {
        error!("Error writing to .env file {}: {}", path, e);
        e
    })?;

    std::fs::write(path, content).map_err(|e| {
        error!("Error writing to .env file {}: {}", path, e);
        ConfShiftError::io(format!("Failed to write .env file {}", path), e)
    })?;

    info!("Successfully wrote configuration to .env file: {}", path);
    Ok(())
}

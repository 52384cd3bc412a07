//! The configuration store: load once, emit in any supported form.

use camino::Utf8Path;
use confshift_core::ConfigValue;
use tracing::debug;

use crate::emit::{self, EnvWriter, ProcessEnv};
use crate::flatten::{self, FlatConfig, FlattenOptions};
use crate::format::ConfigFormat;
use crate::{ini, yaml, ConfigResult};

/// Holds the canonical configuration between loading and emitting.
///
/// The store starts out as an empty mapping. Each successful load replaces
/// the whole configuration; a failed load leaves it untouched. No internal
/// locking is done, so one store must not be driven from several threads at
/// once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationStore {
    config: ConfigValue,
}

impl ConfigurationStore {
    /// Create a store holding an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store around an existing configuration
    pub fn with_config(config: ConfigValue) -> Self {
        Self { config }
    }

    /// Current canonical configuration
    pub fn config(&self) -> &ConfigValue {
        &self.config
    }

    /// Replace the canonical configuration
    pub fn set_config(&mut self, config: ConfigValue) {
        self.config = config;
    }

    /// Take the canonical configuration out of the store
    pub fn into_config(self) -> ConfigValue {
        self.config
    }

    /// Load a file, picking the format from its extension
    pub fn load_from(&mut self, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        self.load_as(path, format)
    }

    /// Load a file in an explicitly chosen format
    pub fn load_as(&mut self, path: impl AsRef<Utf8Path>, format: ConfigFormat) -> ConfigResult<()> {
        let path = path.as_ref();
        debug!("Loading {} as {}", path, format);

        self.config = match format {
            ConfigFormat::Yaml => yaml::load_from_file(path)?,
            ConfigFormat::Ini => ini::load_from_file(path)?,
        };
        Ok(())
    }

    /// Flatten the configuration with the given options
    pub fn flatten(&self, options: &FlattenOptions) -> ConfigResult<FlatConfig> {
        flatten::flatten(&self.config, options)
    }

    /// JSON document for embedding elsewhere
    pub fn to_json_string(&self) -> ConfigResult<String> {
        emit::to_json_string(&self.config)
    }

    /// Write the configuration as a JSON document
    pub fn write_json(&self, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
        emit::write_json(&self.config, path.as_ref())
    }

    /// `.env` text of the flattened configuration
    pub fn render_env_file(&self) -> ConfigResult<String> {
        emit::render_env_file(&self.config, &FlattenOptions::default())
    }

    /// Write the flattened configuration as a `.env` file
    pub fn write_env_file(&self, path: impl AsRef<Utf8Path>) -> ConfigResult<()> {
        emit::write_env_file(&self.config, path.as_ref())
    }

    /// Export top-level keys through an environment writer
    pub fn write_env<W: EnvWriter + ?Sized>(&self, writer: &mut W) -> ConfigResult<()> {
        emit::write_env(&self.config, writer)
    }

    /// Export top-level keys into the environment of this process
    pub fn write_process_env(&self) -> ConfigResult<()> {
        self.write_env(&mut ProcessEnv)
    }
}

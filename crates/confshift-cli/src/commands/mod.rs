//! Command implementations and dispatch logic.
//!
//! Each command loads its input through the shared CommandContext and then
//! hands the store to one emitter.

use camino::Utf8Path;
use confshift_config::{ConfigFormat, ConfigurationStore};
use confshift_core::error::ConfShiftResult;
use tracing::info;

pub mod convert;
pub mod exec;
pub mod flatten;
pub mod show;

#[cfg(test)]
mod tests;

use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub format: Option<ConfigFormat>,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(format: Option<ConfigFormat>) -> Self {
        Self {
            format,
            output: OutputHandler::new(),
        }
    }

    /// Load `input`, honouring the `--format` override when given
    pub fn load(&self, input: &Utf8Path) -> ConfShiftResult<ConfigurationStore> {
        let mut store = ConfigurationStore::new();
        match self.format {
            Some(format) => store.load_as(input, format)?,
            None => store.load_from(input)?,
        }
        Ok(store)
    }
}

/// Dispatch a command to its handler, returning the process exit code
pub fn dispatch_command(command: Commands, ctx: &CommandContext) -> ConfShiftResult<u8> {
    match command {
        Commands::Show { input } => {
            info!("Showing {}", input);
            show::execute(&input, ctx).map(|_| 0)
        },
        Commands::Flatten {
            input,
            separator,
            prefix,
            strict,
        } => {
            info!("Flattening {} (separator: {:?}, strict: {})", input, separator, strict);
            flatten::execute(&input, separator, prefix, strict, ctx).map(|_| 0)
        },
        Commands::Json { input, output } => {
            info!("Converting {} to JSON {}", input, output);
            convert::json(&input, &output, ctx).map(|_| 0)
        },
        Commands::EnvFile { input, output } => {
            info!("Converting {} to .env {}", input, output);
            convert::env_file(&input, &output, ctx).map(|_| 0)
        },
        Commands::Exec { input, command } => {
            info!("Running {:?} with environment from {}", command, input);
            exec::execute(&input, &command, ctx)
        },
    }
}

//! `confshift exec` command implementation.
//!
//! Exports the top-level keys of the configuration into this process's
//! environment, then runs the command so it inherits them.

use camino::Utf8Path;
use confshift_core::error::{ConfShiftError, ConfShiftResult};
use std::process::Command;
use tracing::debug;

use super::CommandContext;

/// Execute the `confshift exec` command, returning the child's exit code
pub fn execute(input: &Utf8Path, command: &[String], ctx: &CommandContext) -> ConfShiftResult<u8> {
    let (program, args) = command.split_first().ok_or_else(|| {
        ConfShiftError::io(
            "No command given to exec".to_string(),
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
        )
    })?;

    ctx.load(input)?.write_process_env()?;

    debug!("Spawning {} {:?}", program, args);
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| ConfShiftError::io(format!("Failed to run {}", program), e))?;

    // Killed by a signal: no exit code
    Ok(status.code().map(|code| code as u8).unwrap_or(1))
}

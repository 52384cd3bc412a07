//! `confshift json` and `confshift env-file` command implementations.

use camino::Utf8Path;
use confshift_core::error::ConfShiftResult;

use super::CommandContext;

/// Execute the `confshift json` command
pub fn json(input: &Utf8Path, output: &Utf8Path, ctx: &CommandContext) -> ConfShiftResult<()> {
    ctx.load(input)?.write_json(output)?;
    ctx.output.success(&format!("Wrote {}", output));
    Ok(())
}

/// Execute the `confshift env-file` command
pub fn env_file(input: &Utf8Path, output: &Utf8Path, ctx: &CommandContext) -> ConfShiftResult<()> {
    ctx.load(input)?.write_env_file(output)?;
    ctx.output.success(&format!("Wrote {}", output));
    Ok(())
}

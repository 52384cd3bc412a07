//! `confshift show` command implementation.

use camino::Utf8Path;
use confshift_core::error::ConfShiftResult;

use super::CommandContext;

/// Execute the `confshift show` command
pub fn execute(input: &Utf8Path, ctx: &CommandContext) -> ConfShiftResult<()> {
    let json = render(input, ctx)?;
    ctx.output.print(&json);
    Ok(())
}

/// JSON document for `input`
pub fn render(input: &Utf8Path, ctx: &CommandContext) -> ConfShiftResult<String> {
    ctx.load(input)?.to_json_string()
}

//! `confshift flatten` command implementation.
//!
//! Prints the same `KEY=VALUE` lines the env-file emitter writes, but with a
//! configurable separator, prefix and collision policy.

use camino::Utf8Path;
use confshift_config::{emit::render_env_file, CollisionPolicy, FlattenOptions};
use confshift_core::error::ConfShiftResult;

use super::CommandContext;

/// Execute the `confshift flatten` command
pub fn execute(
    input: &Utf8Path,
    separator: String,
    prefix: String,
    strict: bool,
    ctx: &CommandContext,
) -> ConfShiftResult<()> {
    let options = build_options(separator, prefix, strict);
    let text = render(input, &options, ctx)?;
    ctx.output.print_raw(&text);
    Ok(())
}

pub fn build_options(separator: String, prefix: String, strict: bool) -> FlattenOptions {
    let collision = if strict {
        CollisionPolicy::Error
    } else {
        CollisionPolicy::Overwrite
    };

    FlattenOptions::new()
        .with_separator(separator)
        .with_prefix(prefix)
        .with_collision(collision)
}

pub fn render(input: &Utf8Path, options: &FlattenOptions, ctx: &CommandContext) -> ConfShiftResult<String> {
    let store = ctx.load(input)?;
    render_env_file(store.config(), options)
}

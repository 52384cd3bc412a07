//! # confshift-cli
//!
//! Convert YAML and INI-style configuration into JSON, `.env` files or
//! environment variables.
//!
//! This is the main entry point for the confshift CLI tool. It handles command
//! parsing, sets up logging and error handling, and dispatches to the
//! appropriate command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use confshift_config::ConfigFormat;
use std::process::ExitCode;
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Convert configuration files between YAML, INI, JSON and .env
#[derive(Parser)]
#[command(name = "confshift", version, about = "Convert configuration between formats")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read the input as this format instead of guessing from its extension
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configuration as JSON
    Show {
        input: Utf8PathBuf,
    },
    /// Print the flattened configuration as KEY=VALUE lines
    Flatten {
        input: Utf8PathBuf,
        /// Separator placed between nested keys
        #[arg(long, default_value = "_")]
        separator: String,
        /// Prefix prepended to every key
        #[arg(long, default_value = "")]
        prefix: String,
        /// Fail when two nested paths flatten to the same key
        #[arg(long)]
        strict: bool,
    },
    /// Write the configuration to a JSON file
    Json {
        input: Utf8PathBuf,
        output: Utf8PathBuf,
    },
    /// Write the flattened configuration to a .env file
    EnvFile {
        input: Utf8PathBuf,
        output: Utf8PathBuf,
    },
    /// Export top-level keys as environment variables and run a command
    Exec {
        input: Utf8PathBuf,
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

/// Input format override
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Yaml,
    Ini,
}

impl From<FormatArg> for ConfigFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => ConfigFormat::Yaml,
            FormatArg::Ini => ConfigFormat::Ini,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting confshift v{}", env!("CARGO_PKG_VERSION"));

    let ctx = CommandContext::new(cli.format.map(ConfigFormat::from));
    match commands::dispatch_command(cli.command, &ctx) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{}", ErrorFormatter::new().format_error(&e));
            ExitCode::FAILURE
        },
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "confshift={},confshift_config={},confshift_core={}",
            level, level, level
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("confshift encountered an unexpected error: {}", panic_info);
        eprintln!("confshift crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}

//! ignorepick CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick a template and write ./.gitignore (default command)
//! ignorepick
//!
//! # Write into another directory, refreshing the templates first
//! ignorepick pick --dest ../service --update
//!
//! # Append a template to an existing file
//! ignorepick pick --print >> .gitignore
//!
//! # List what is available
//! ignorepick list
//! ```
//!
//! # Configuration
//!
//! Optional settings are read from `~/.config/ignorepick/config.toml` and
//! `IGNOREPICK_*` environment variables; flags win over both.

use ignorepick::{
    PickError,
    cli::{Cli, Commands},
    commands,
    config::AppConfig,
    ui::{OutputWriter, RatatuiPicker, StderrWriter},
};
use std::io;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, PickError>;

/// Load configuration and build the diagnostics writer it asks for
fn settings(cli: &Cli) -> Result<(AppConfig, StderrWriter)> {
    let config = AppConfig::load()?.with_overrides(cli.overrides());
    let output = StderrWriter::new(config.quiet);
    Ok((config, output))
}

/// Dispatch to the command handler
///
/// Only command results are written to stdout.
fn run(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match cli.get_command() {
        Commands::Pick(args) => {
            let (config, output) = settings(cli)?;
            let picker = RatatuiPicker::new();
            commands::pick(&config, &args, &picker, &output, &mut stdout)?;
        }
        Commands::List { absolute } => {
            let (config, output) = settings(cli)?;
            commands::list(&config, absolute, &output, &mut stdout)?;
        }
        Commands::Completions { shell } => {
            commands::completions(shell, &mut stdout);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            StderrWriter::new(false).error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

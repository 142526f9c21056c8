//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **pick**: choose a template in the fuzzy finder and install it (default)
//! - **list**: print every available template, relative to the clone
//! - **completions**: print a shell completion script
//!
//! # Examples
//!
//! ```
//! use ignorepick::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["ignorepick", "pick", "--print"]);
//! assert!(matches!(cli.get_command(), Commands::Pick(args) if args.print));
//! ```

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pick a .gitignore template with a fuzzy finder
#[derive(Parser, Debug)]
#[command(name = "ignorepick", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Reference repository to clone
    #[arg(long = "repo-url", value_name = "URL", global = true)]
    pub repo_url: Option<String>,

    /// Local clone of the reference repository
    #[arg(long = "repo-dir", value_name = "DIR", global = true)]
    pub repo_dir: Option<PathBuf>,

    /// File name glob selecting templates
    #[arg(long = "pattern", value_name = "GLOB", global = true)]
    pub pattern: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Choose a template interactively and install it (default)
    #[command(visible_alias = "p")]
    Pick(PickArgs),

    /// Print all available template names
    #[command(visible_alias = "ls")]
    List {
        /// Print absolute paths instead of names relative to the clone
        #[arg(long = "absolute")]
        absolute: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options for the pick command
#[derive(Args, Debug, Clone, Default)]
pub struct PickArgs {
    /// Directory to write .gitignore into (default: current directory)
    #[arg(long = "dest", value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Delete and re-clone the reference repository
    #[arg(long = "force", conflicts_with = "update")]
    pub force: bool,

    /// Pull the latest templates before picking
    #[arg(long = "update")]
    pub update: bool,

    /// Print the chosen template to stdout instead of writing .gitignore
    #[arg(long = "print", conflicts_with = "dest")]
    pub print: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to `pick`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Pick(PickArgs::default()))
    }

    /// Configuration values given as flags
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            repo_url: self.repo_url.clone(),
            repo_dir: self.repo_dir.clone(),
            pattern: self.pattern.clone(),
            quiet: self.quiet,
        }
    }
}

//! ignorepick - pick a `.gitignore` template with a fuzzy finder
//!
//! Templates come from a local clone of a reference repository
//! (github/gitignore by default). The chosen file is copied into the
//! current directory as `.gitignore`.
//!
//! The interesting parts are the [`matcher`] (ordered subsequence
//! filtering), the interactive picker in [`ui`] and the prefix reduction in
//! [`paths`]. The rest wires the collaborators together.

use std::path::PathBuf;
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod install;
pub mod matcher;
pub mod paths;
pub mod repo;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Cloning or updating the template repository failed
    #[error(transparent)]
    RepoError(#[from] repo::RepoError),
    /// Templates could not be enumerated
    #[error(transparent)]
    DiscoveryError(#[from] discovery::DiscoveryError),
    /// The chosen template could not be installed
    #[error(transparent)]
    InstallError(#[from] install::InstallError),
    /// Interactive picker error
    #[error(transparent)]
    UiError(#[from] ui::UiError),
    /// The template directory holds nothing matching the pattern
    #[error("No templates matching '{pattern}' found in {}", .dir.display())]
    NoTemplates { dir: PathBuf, pattern: String },
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

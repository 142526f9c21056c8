//! Template discovery
//!
//! Finds every file below the clone whose name matches the configured glob.

use glob::{MatchOptions, glob_with};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from enumerating template files
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The template directory is missing or is a file
    #[error("Path {} does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The file name glob could not be parsed
    #[error("Invalid template pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// List files under `dir` (recursively) whose name matches `pattern`
///
/// Results are sorted so the finder shows a stable order. Entries that
/// cannot be read are skipped.
///
/// # Errors
///
/// Returns `DiscoveryError::NotADirectory` if `dir` is not a directory and
/// `DiscoveryError::InvalidPattern` if `pattern` is not a valid glob.
pub fn find_templates(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !dir.is_dir() {
        return Err(DiscoveryError::NotADirectory(dir.to_path_buf()));
    }

    let full_pattern = format!(
        "{}/**/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let entries = glob_with(&full_pattern, options).map_err(|e| DiscoveryError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.msg.to_string(),
    })?;

    let mut templates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file() && !is_hidden_below(dir, path))
        .collect();
    templates.sort();

    Ok(templates)
}

/// Whether any component of `path` below `root` starts with a dot (`.git`)
fn is_hidden_below(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root).is_ok_and(|relative| {
        relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
    })
}

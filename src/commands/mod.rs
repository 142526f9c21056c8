//! Command implementations
//!
//! Each command is a module with an execute function that takes the
//! resolved configuration, its parsed arguments and the output handles.

pub mod completions;
pub mod list;
pub mod pick;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use list::execute as list;
pub use pick::execute as pick;

use crate::PickError;
use crate::config::AppConfig;
use crate::discovery::find_templates;
use crate::paths::common_prefix_and_relativize;
use crate::repo::{RepoStatus, ensure_repository, update_repository};
use crate::ui::output::OutputWriter;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, PickError>;

/// Templates found in the clone, split into shared prefix and display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Directory shared by every template (may be empty)
    pub prefix: PathBuf,
    /// Paths relative to `prefix`, in discovery order
    pub relative: Vec<PathBuf>,
}

impl TemplateSet {
    /// Names shown to the user
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.relative
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect()
    }

    /// Full path of the template displayed as `name`
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.relative
            .iter()
            .find(|path| path.to_string_lossy() == name)
            .map(|path| self.prefix.join(path))
    }
}

/// Clone the reference repository if needed and collect its templates
///
/// `force` re-clones the repository; `update` pulls an existing clone.
/// Either happens before discovery, so the templates returned are the ones
/// on disk afterwards.
///
/// # Errors
///
/// Returns `PickError` if cloning, updating or discovery fails, or nothing
/// matches the configured pattern.
pub fn load_templates(
    config: &AppConfig,
    force: bool,
    update: bool,
    output: &dyn OutputWriter,
) -> Result<(TemplateSet, RepoStatus)> {
    let status = ensure_repository(&config.repo_url, &config.repo_dir, force, output)?;
    if update && status == RepoStatus::Reused {
        update_repository(&config.repo_dir, output)?;
    }

    let templates = find_templates(&config.repo_dir, &config.pattern)?;
    if templates.is_empty() {
        return Err(PickError::NoTemplates {
            dir: config.repo_dir.clone(),
            pattern: config.pattern.clone(),
        });
    }
    output.info(&format!("Parsed {} files.", templates.len()));

    let (prefix, relative) = common_prefix_and_relativize(&templates);
    Ok((TemplateSet { prefix, relative }, status))
}

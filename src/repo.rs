//! Local clone of the template repository
//!
//! The clone is made once with the system `git` and reused afterwards.
//! `--force` removes it and clones again, `--update` fast-forwards it.

use crate::ui::output::OutputWriter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Errors from cloning or updating the template repository
#[derive(Debug, Error)]
pub enum RepoError {
    /// `git` could not be started
    #[error("Failed to run git (is it installed?): {0}")]
    GitUnavailable(#[source] io::Error),

    /// `git clone` exited unsuccessfully
    #[error("Cloning {url} into {} failed ({status})", .dir.display())]
    CloneFailed {
        url: String,
        dir: PathBuf,
        status: ExitStatus,
    },

    /// `git pull` exited unsuccessfully
    #[error("Updating {} failed ({status})", .dir.display())]
    UpdateFailed { dir: PathBuf, status: ExitStatus },

    /// An existing clone could not be removed before re-cloning
    #[error("Failed to remove {}: {source}", .dir.display())]
    RemoveFailed {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What [`ensure_repository`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoStatus {
    /// An existing directory was used as-is
    Reused,
    /// The repository was freshly cloned
    Cloned,
}

/// Make sure `dir` holds a clone of `url`
///
/// An existing `dir` is trusted and reused unless `force` is set, in which
/// case it is deleted and cloned again.
///
/// # Errors
///
/// Returns `RepoError` if the old clone cannot be removed, `git` cannot be
/// started, or the clone fails.
pub fn ensure_repository(
    url: &str,
    dir: &Path,
    force: bool,
    output: &dyn OutputWriter,
) -> Result<RepoStatus, RepoError> {
    if dir.exists() {
        if !force {
            return Ok(RepoStatus::Reused);
        }

        output.info(&format!("{} exists. Removing it...", dir.display()));
        fs::remove_dir_all(dir).map_err(|source| RepoError::RemoveFailed {
            dir: dir.to_path_buf(),
            source,
        })?;
    }

    output.info(&format!("Cloning {url} into {}", dir.display()));

    let status = Command::new("git")
        .arg("clone")
        .arg("--quiet")
        .arg(url)
        .arg(dir)
        .stdin(Stdio::null())
        .status()
        .map_err(RepoError::GitUnavailable)?;

    if !status.success() {
        return Err(RepoError::CloneFailed {
            url: url.to_string(),
            dir: dir.to_path_buf(),
            status,
        });
    }

    output.success(&format!("Repository {url} cloned into {}", dir.display()));
    Ok(RepoStatus::Cloned)
}

/// Fast-forward an existing clone to the latest upstream commit
///
/// # Errors
///
/// Returns `RepoError` if `git` cannot be started or the pull fails.
pub fn update_repository(dir: &Path, output: &dyn OutputWriter) -> Result<(), RepoError> {
    output.info(&format!("Updating {}", dir.display()));

    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["pull", "--ff-only", "--quiet"])
        .stdin(Stdio::null())
        .status()
        .map_err(RepoError::GitUnavailable)?;

    if !status.success() {
        return Err(RepoError::UpdateFailed {
            dir: dir.to_path_buf(),
            status,
        });
    }

    Ok(())
}

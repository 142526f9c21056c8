//! Installing a chosen template

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name written into the destination directory
pub const GITIGNORE: &str = ".gitignore";

/// Errors from installing a template
#[derive(Debug, Error)]
pub enum InstallError {
    /// The template vanished between discovery and copy
    #[error("Template {} was not found", .0.display())]
    SourceMissing(PathBuf),

    /// The destination directory does not exist
    #[error("Destination {} is not a directory", .0.display())]
    DestinationMissing(PathBuf),

    /// Reading or writing failed
    #[error("Failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Copy `source` to `dest_dir/.gitignore`
///
/// An existing `.gitignore` is overwritten without asking.
///
/// # Errors
///
/// Returns `InstallError` if the template or destination directory is
/// missing, or the copy fails.
pub fn install_template(source: &Path, dest_dir: &Path) -> Result<PathBuf, InstallError> {
    if !source.is_file() {
        return Err(InstallError::SourceMissing(source.to_path_buf()));
    }
    if !dest_dir.is_dir() {
        return Err(InstallError::DestinationMissing(dest_dir.to_path_buf()));
    }

    let destination = dest_dir.join(GITIGNORE);
    fs::copy(source, &destination).map_err(|e| InstallError::Copy {
        from: source.to_path_buf(),
        to: destination.clone(),
        source: e,
    })?;

    Ok(destination)
}

/// Write the template's contents to `out` instead of installing it
///
/// # Errors
///
/// Returns `InstallError` if the template cannot be read or `out` fails.
pub fn print_template(source: &Path, out: &mut dyn Write) -> Result<(), InstallError> {
    let contents = fs::read(source).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            InstallError::SourceMissing(source.to_path_buf())
        } else {
            InstallError::Copy {
                from: source.to_path_buf(),
                to: PathBuf::from("<stdout>"),
                source: e,
            }
        }
    })?;

    out.write_all(&contents)
        .and_then(|()| out.flush())
        .map_err(|e| InstallError::Copy {
            from: source.to_path_buf(),
            to: PathBuf::from("<stdout>"),
            source: e,
        })
}

//! Common path prefix reduction
//!
//! Template files live deep inside the reference clone
//! (`~/gitignore/Global/macOS.gitignore`). Before display the shared
//! directory is stripped so the finder shows `Global/macOS.gitignore`.

use std::path::{Path, PathBuf};

/// Compute the deepest directory containing every path and make each path
/// relative to it
///
/// Returns an empty prefix together with the unchanged input when no
/// reduction is possible, i.e. the only shared ancestor is the filesystem
/// root or the paths are relative without a shared first component.
/// Callers join the prefix back with [`Path::join`], which treats an empty
/// prefix as a no-op.
///
/// A directory equal to one of the inputs does not count as containing it:
/// a single path (or a set of duplicates) reduces to its parent, so no
/// relative name is ever empty.
///
/// # Examples
///
/// ```
/// use ignorepick::paths::common_prefix_and_relativize;
/// use std::path::PathBuf;
///
/// let paths = vec![
///     PathBuf::from("/a/b/x.gitignore"),
///     PathBuf::from("/a/b/c/y.gitignore"),
/// ];
/// let (prefix, relative) = common_prefix_and_relativize(&paths);
/// assert_eq!(prefix, PathBuf::from("/a/b"));
/// assert_eq!(relative, vec![PathBuf::from("x.gitignore"), PathBuf::from("c/y.gitignore")]);
/// ```
#[must_use]
pub fn common_prefix_and_relativize(paths: &[PathBuf]) -> (PathBuf, Vec<PathBuf>) {
    let Some(first) = paths.first() else {
        return (PathBuf::new(), Vec::new());
    };

    let Some(prefix) = common_ancestor(first, paths) else {
        return (PathBuf::new(), paths.to_vec());
    };

    let relative = paths
        .iter()
        .map(|path| {
            path.strip_prefix(prefix)
                .map_or_else(|_| path.clone(), Path::to_path_buf)
        })
        .collect();

    (prefix.to_path_buf(), relative)
}

/// Walk up from `start` until every path lives strictly below the candidate
fn common_ancestor<'a>(start: &'a Path, paths: &[PathBuf]) -> Option<&'a Path> {
    let mut candidate = start;

    while !paths
        .iter()
        .all(|path| path.starts_with(candidate) && path.as_path() != candidate)
    {
        candidate = candidate.parent()?;
    }

    // The root (or an empty relative path) is not a useful prefix
    if candidate.as_os_str().is_empty() || candidate.parent().is_none() {
        return None;
    }

    Some(candidate)
}

use std::fmt::Write;
use std::fs;
use std::path::{self, Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{IoError, NotDirectoryError, NotRegularFileError};
use crate::filtering::Predicate;
use crate::ordering::{sort, Comparator};
use crate::seq::iterable;
use crate::strings::is_blank;

fn file_name(filename: &str) -> &str {
    filename.rsplit(path::is_separator).next().unwrap_or(filename)
}

/// The extension of the last component of `filename`, without the dot. Empty if there is none.
///
/// # Examples
/// ```
/// # use functional_core::io::filename_extension;
/// assert_eq!(filename_extension("path/to/foo.bar.ext"), "ext");
/// assert_eq!(filename_extension("foo"), "");
/// ```
pub fn filename_extension(filename: &str) -> &str {
    if is_blank(filename) {
        return "";
    }
    file_name(filename).rsplit_once('.').map_or("", |(_, extension)| extension)
}

/// The last component of `filename`, without its extension.
///
/// # Examples
/// ```
/// # use functional_core::io::filename_without_extension;
/// assert_eq!(filename_without_extension("path/to/foo.bar.ext"), "foo.bar");
/// assert_eq!(filename_without_extension("foo."), "foo");
/// ```
pub fn filename_without_extension(filename: &str) -> &str {
    let name = file_name(filename);
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

/// Deletes the regular file at `path`.
///
/// # Errors
/// Returns [`IoError::NotRegularFile`] if `path` isn't a regular file.
pub fn delete_file(path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(NotRegularFileError {
            path: path.to_owned(),
        }
        .into());
    }
    debug!(path = %path.display(), "deleting file");
    fs::remove_file(path)?;
    Ok(())
}

/// Deletes the directory at `path` along with everything below it.
///
/// # Errors
/// Returns [`IoError::NotDirectory`] if `path` isn't a directory.
pub fn delete_directory(path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(NotDirectoryError {
            path: path.to_owned(),
        }
        .into());
    }
    debug!(path = %path.display(), "deleting directory");
    fs::remove_dir_all(path)?;
    Ok(())
}

/// Drops `.` components and folds each `..` into its parent, without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn find<P, C>(root: &Path, depth: usize, mut filter: P, comparator: C) -> Result<Vec<PathBuf>, IoError>
where
    P: Predicate<PathBuf>,
    C: Comparator<PathBuf>,
{
    debug!(root = %root.display(), depth, "finding paths");
    let mut found = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(depth) {
        let path = normalize(&path::absolute(entry?.path())?);
        if filter.test(&path) {
            found.push(path);
        }
    }
    Ok(sort(comparator, iterable(found)))
}

/// Lists the absolute paths of the direct children of `root` accepted by `filter`, ordered by
/// `comparator`.
///
/// # Errors
/// Returns an [`IoError`] if `root` can't be read.
pub fn find_paths<P, C>(root: impl AsRef<Path>, filter: P, comparator: C) -> Result<Vec<PathBuf>, IoError>
where
    P: Predicate<PathBuf>,
    C: Comparator<PathBuf>,
{
    find(root.as_ref(), 1, filter, comparator)
}

/// Like [`find_paths`], but descends through the whole tree below `root`.
pub fn find_paths_recursively<P, C>(root: impl AsRef<Path>, filter: P, comparator: C) -> Result<Vec<PathBuf>, IoError>
where
    P: Predicate<PathBuf>,
    C: Comparator<PathBuf>,
{
    find(root.as_ref(), usize::MAX, filter, comparator)
}

/// Renders the tree below `root` one entry per line, children sorted by name and indented by four
/// spaces per level. Directory names sit one column left of the files they contain.
///
/// ```text
/// root
///     a.txt
///    nested
///         inner.txt
/// ```
///
/// # Errors
/// Returns an [`IoError`] if any part of the tree can't be read.
pub fn format_tree(root: impl AsRef<Path>) -> Result<String, IoError> {
    let mut tree = String::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let indent = if entry.file_type().is_dir() {
            (entry.depth() * 4).saturating_sub(1)
        } else {
            entry.depth() * 4
        };
        // Writing to a String can't fail.
        let _ = writeln!(tree, "{:indent$}{}", "", entry.file_name().to_string_lossy());
    }
    Ok(tree)
}

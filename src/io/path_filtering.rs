//! [`Predicate`]s over paths.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::UNIX_EPOCH;

use derive_more::{Display, IsVariant};
use glob::Pattern;
use regex::Regex;

use super::{InvalidTypeSpecifierError, IoError};
use crate::filtering::{by, Predicate};
use crate::timing::TimeUnit;

/// The type of the file a path points at, without following symlinks.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum PathKind {
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
    #[display("unknown")]
    Unknown,
}

impl PathKind {
    pub fn of(path: &Path) -> PathKind {
        match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.is_file() => PathKind::File,
            Ok(metadata) if metadata.is_dir() => PathKind::Directory,
            _ => PathKind::Unknown,
        }
    }
}

impl FromStr for PathKind {
    type Err = InvalidTypeSpecifierError;

    /// Accepts `f` or `file` and `d` or `directory`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f" | "file" => Ok(PathKind::File),
            "d" | "directory" => Ok(PathKind::Directory),
            _ => Err(InvalidTypeSpecifierError {
                specifier: s.to_owned(),
            }),
        }
    }
}

fn kind(path: &PathBuf) -> PathKind {
    PathKind::of(path)
}

fn of_kind(wanted: PathKind) -> impl Predicate<PathBuf> + Clone {
    by(kind, move |found: &PathKind| *found == wanted)
}

/// Holds for regular files.
pub fn files() -> impl Predicate<PathBuf> + Clone {
    of_kind(PathKind::File)
}

/// Holds for directories.
pub fn directories() -> impl Predicate<PathBuf> + Clone {
    of_kind(PathKind::Directory)
}

/// Holds for paths of the type named by `specifier`, see [`PathKind::from_str`].
///
/// # Errors
/// Returns [`IoError::InvalidTypeSpecifier`] for anything but a file or directory specifier.
pub fn by_type(specifier: &str) -> Result<impl Predicate<PathBuf> + Clone + use<>, IoError> {
    Ok(of_kind(specifier.parse()?))
}

/// Holds for paths whose final component matches the glob `pattern`.
///
/// # Examples
/// ```
/// # use std::path::PathBuf;
/// # use functional_core::{filtering::Predicate, io::path_filtering::by_name};
/// let mut sources = by_name("*.rs").unwrap();
/// assert!(sources.test(&PathBuf::from("src/lib.rs")));
/// assert!(!sources.test(&PathBuf::from("Cargo.toml")));
/// ```
pub fn by_name(pattern: &str) -> Result<impl Predicate<PathBuf> + Clone + use<>, IoError> {
    let pattern = Pattern::new(pattern)?;
    Ok(move |path: &PathBuf| {
        path.file_name()
            .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

/// Holds for paths which match the glob `pattern` as a whole.
pub fn by_path(pattern: &str) -> Result<impl Predicate<PathBuf> + Clone + use<>, IoError> {
    let pattern = Pattern::new(pattern)?;
    Ok(move |path: &PathBuf| pattern.matches_path(path))
}

/// Holds for paths which match the regular expression `pattern` in their entirety.
pub fn by_regex(pattern: &str) -> Result<impl Predicate<PathBuf> + Clone + use<>, IoError> {
    let regex = Regex::new(&format!("^(?:{pattern})$"))?;
    Ok(move |path: &PathBuf| regex.is_match(&path.to_string_lossy()))
}

/// The modification time of `path` in `unit` since the Unix epoch.
pub(crate) fn last_modified(path: &Path, unit: TimeUnit) -> Option<u64> {
    let modified = fs::metadata(path).and_then(|metadata| metadata.modified()).ok()?;
    let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
    Some(unit.of(since_epoch))
}

/// Holds for paths last modified in the half-open window `from..to`, both measured in `unit`
/// since the Unix epoch. Paths without a readable modification time never match.
pub fn by_last_modified(unit: TimeUnit, from: u64, to: u64) -> impl Predicate<PathBuf> + Clone {
    move |path: &PathBuf| last_modified(path, unit).is_some_and(|time| from <= time && time < to)
}

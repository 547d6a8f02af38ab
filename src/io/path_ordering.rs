//! [`Comparator`]s over paths.

use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

use super::path_filtering::last_modified;
use crate::ordering::{ascending, by, Comparator};
use crate::strings::{is_numeric, split_into_numeric_and_non_numeric_parts};
use crate::timing::TimeUnit;

/// Orders paths by their string form.
pub fn by_path_lexicographically() -> impl Comparator<PathBuf> + Clone {
    by(|path: &PathBuf| path.to_string_lossy().into_owned(), ascending())
}

/// Compares two runs of ASCII digits by the numbers they spell, however long.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_numerically(a: &str, b: &str) -> Ordering {
    let a = split_into_numeric_and_non_numeric_parts(a);
    let b = split_into_numeric_and_non_numeric_parts(b);
    for (a, b) in a.iter().zip(&b) {
        let result = if is_numeric(a) && is_numeric(b) {
            compare_digits(a, b)
        } else {
            a.cmp(b)
        };
        if result.is_ne() {
            return result;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_segments(a: &PathBuf, b: &PathBuf) -> Ordering {
    let has_digits = |segment: &str| segment.bytes().any(|b| b.is_ascii_digit());
    let mut segments = a.components().map(|c| c.as_os_str().to_string_lossy());
    let mut others = b.components().map(|c| c.as_os_str().to_string_lossy());
    loop {
        let (a, b) = match (segments.next(), others.next()) {
            (Some(a), Some(b)) => (a, b),
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        };
        let result = if has_digits(&*a) || has_digits(&*b) {
            compare_numerically(&a, &b)
        } else {
            a.cmp(&b)
        };
        if result.is_ne() {
            return result;
        }
    }
}

/// Orders paths segment by segment, comparing runs of digits within a segment by their numeric
/// value, so that `file2` comes before `file10`.
///
/// # Examples
/// ```
/// # use std::path::PathBuf;
/// # use functional_core::{io::path_ordering::by_path_numerically, ordering::sort};
/// # use functional_core::seq::iterable;
/// let paths: Vec<PathBuf> = ["dir/file10", "dir/file2"].map(PathBuf::from).into();
/// assert_eq!(
///     sort(by_path_numerically(), iterable(paths)),
///     ["dir/file2", "dir/file10"].map(PathBuf::from)
/// );
/// ```
pub fn by_path_numerically() -> impl Comparator<PathBuf> + Copy {
    compare_segments
}

/// Orders paths by the size of the file they point at. Unreadable paths count as empty.
pub fn by_size() -> impl Comparator<PathBuf> + Clone {
    by(
        |path: &PathBuf| fs::metadata(path).map_or(0, |metadata| metadata.len()),
        ascending(),
    )
}

/// Orders paths by their modification time. Unreadable paths count as the Unix epoch.
pub fn by_last_modified() -> impl Comparator<PathBuf> + Clone {
    by(
        |path: &PathBuf| last_modified(path, TimeUnit::Nanoseconds).unwrap_or(0),
        ascending(),
    )
}

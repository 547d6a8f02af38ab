use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::IoError;

/// A step applied to every line read by [`slurp_with`].
pub type LineProcessing<'a> = &'a dyn Fn(String) -> String;

/// Replaces whitespace-only lines with the empty string.
pub fn ignoring_blank_lines() -> impl Fn(String) -> String + Clone {
    |line: String| if line.trim().is_empty() { String::new() } else { line }
}

/// Cuts every line at the first occurrence of `symbol`, for example to strip comments.
pub fn ignoring_line_segments_that_start_with(symbol: &str) -> impl Fn(String) -> String + Clone + use<> {
    let symbol = symbol.to_owned();
    move |mut line: String| {
        if let Some(index) = line.find(symbol.as_str()) {
            line.truncate(index);
        }
        line
    }
}

/// Splits on `\n`, `\r` and `\r\n`. A terminator at the very end doesn't start another line.
fn lines(contents: &str) -> impl Iterator<Item = &str> {
    let contents = contents
        .strip_suffix("\r\n")
        .or_else(|| contents.strip_suffix(['\n', '\r']))
        .unwrap_or(contents);
    let mut rest = (!contents.is_empty()).then_some(contents);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(index) => {
                let len = if current[index..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[index + len..]);
                Some(&current[..index])
            },
            None => {
                rest = None;
                Some(current)
            },
        }
    })
}

/// Reads everything from `reader`, normalizing line terminators to `\n` and dropping the final
/// one.
///
/// # Errors
/// Returns [`IoError::Io`] if reading fails or the contents aren't UTF-8.
pub fn slurp<R: Read>(mut reader: R) -> Result<String, IoError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(lines(&contents).collect::<Vec<_>>().join("\n"))
}

/// Reads the whole file at `path`, see [`slurp`].
pub fn slurp_path(path: impl AsRef<Path>) -> Result<String, IoError> {
    slurp(File::open(path)?)
}

/// Reads everything from `reader`, passing each line through every step of `processing` in turn.
/// Lines which are blank after processing are dropped.
///
/// # Examples
/// ```
/// # use functional_core::io::{slurp_with, ignoring_line_segments_that_start_with};
/// let strip_comments = ignoring_line_segments_that_start_with("#");
/// let contents = slurp_with("key = 1 # one\n# nothing\n".as_bytes(), &[&strip_comments]).unwrap();
/// assert_eq!(contents, "key = 1 ");
/// ```
pub fn slurp_with<R: Read>(mut reader: R, processing: &[LineProcessing<'_>]) -> Result<String, IoError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let processed: Vec<String> = lines(&contents)
        .map(|line| processing.iter().fold(line.to_owned(), |line, step| step(line)))
        .filter(|line| !line.trim().is_empty())
        .collect();
    Ok(processed.join("\n"))
}

/// Reads the whole file at `path`, see [`slurp_with`].
pub fn slurp_path_with(path: impl AsRef<Path>, processing: &[LineProcessing<'_>]) -> Result<String, IoError> {
    slurp_with(File::open(path)?, processing)
}

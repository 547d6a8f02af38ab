use std::any::Any;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::IoError;
use crate::maps::{LookupError, Options, OptionsError};
use crate::seq::Sequence;

/// Options for [`spit`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpitOptions {
    /// Append to an existing file instead of truncating it.
    pub append: bool,
    /// Flush the writer once the contents have been written.
    pub flush: bool,
}

impl Default for SpitOptions {
    fn default() -> Self {
        SpitOptions {
            append: false,
            flush: true,
        }
    }
}

impl SpitOptions {
    /// Reads the `"append?"` and `"flush?"` keys of `options`, falling back to the defaults.
    ///
    /// # Errors
    /// Returns a [`LookupError`] if either key holds something other than a `bool`.
    pub fn from_options(options: &Options<'_>) -> Result<SpitOptions, LookupError> {
        let default = SpitOptions::default();
        Ok(SpitOptions {
            append: options.get_or("append?", default.append)?,
            flush: options.get_or("flush?", default.flush)?,
        })
    }

    /// Parses a flat key / value option list, see [`Options::parse`].
    ///
    /// # Examples
    /// ```
    /// # use functional_core::io::SpitOptions;
    /// let options = SpitOptions::parse(&[&"append?", &true]).unwrap();
    /// assert!(options.append && options.flush);
    /// ```
    pub fn parse(elements: &[&dyn Any]) -> Result<SpitOptions, OptionsError> {
        Ok(SpitOptions::from_options(&Options::parse(elements)?)?)
    }
}

/// Writes `contents` to `writer`, flushing afterwards unless told otherwise, and hands the writer
/// back.
pub fn spit<W: Write>(mut writer: W, contents: &str, options: SpitOptions) -> Result<W, IoError> {
    writer.write_all(contents.as_bytes())?;
    if options.flush {
        writer.flush()?;
    }
    Ok(writer)
}

fn open(path: &Path, options: SpitOptions) -> Result<BufWriter<std::fs::File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(options.append)
        .truncate(!options.append)
        .open(path)?;
    Ok(BufWriter::new(file))
}

/// Writes `contents` to the file at `path`, creating it if needed.
pub fn spit_path(path: impl AsRef<Path>, contents: &str, options: SpitOptions) -> Result<(), IoError> {
    let path = path.as_ref();
    debug!(path = %path.display(), append = options.append, "writing file");
    let writer = spit(open(path, options)?, contents, options)?;
    writer.into_inner().map_err(|e| e.into_error())?;
    Ok(())
}

/// Writes every element of `lines` to the file at `path`, each followed by a newline.
pub fn spit_lines<S>(path: impl AsRef<Path>, lines: S, options: SpitOptions) -> Result<(), IoError>
where
    S: Sequence,
    S::Item: AsRef<str>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), append = options.append, "writing lines");
    let mut writer = open(path, options)?;
    for line in lines.iter() {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

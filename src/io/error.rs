use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From};

use crate::maps::{LookupError, OptionsError};

#[derive(Debug, Display, Error)]
#[display("path does not denote a regular file: {}", path.display())]
pub struct NotRegularFileError {
    pub path: PathBuf,
}

#[derive(Debug, Display, Error)]
#[display("path does not denote a directory: {}", path.display())]
pub struct NotDirectoryError {
    pub path: PathBuf,
}

#[derive(Debug, Display, Error)]
#[display("invalid type specifier: {specifier}")]
pub struct InvalidTypeSpecifierError {
    pub specifier: String,
}

/// An error raised by any of the file-system helpers.
#[derive(Debug, Display, From, Error)]
pub enum IoError {
    Io(io::Error),
    Walk(walkdir::Error),
    Glob(glob::PatternError),
    Regex(regex::Error),
    NotRegularFile(NotRegularFileError),
    NotDirectory(NotDirectoryError),
    InvalidTypeSpecifier(InvalidTypeSpecifierError),
    Options(OptionsError),
}

impl From<LookupError> for IoError {
    fn from(value: LookupError) -> Self {
        IoError::Options(value.into())
    }
}

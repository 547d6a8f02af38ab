use derive_more::{Display, Error, From};

use crate::classes::ClassCastError;

/// A flat key / value list had a dangling key.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("wrong number of elements supplied: {len}")]
pub struct OddElementsError {
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("no such key: {key}")]
pub struct NoSuchKeyError {
    pub key: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("option keys must be strings, found one at index {index}")]
pub struct OptionKeyError {
    pub index: usize,
}

/// An error raised while looking up a typed value.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum LookupError {
    NoSuchKey(NoSuchKeyError),
    ClassCast(ClassCastError),
}

/// An error raised while parsing or querying an option list.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum OptionsError {
    OddElements(OddElementsError),
    Key(OptionKeyError),
    Lookup(LookupError),
}

impl From<ClassCastError> for OptionsError {
    fn from(value: ClassCastError) -> Self {
        OptionsError::Lookup(LookupError::ClassCast(value))
    }
}

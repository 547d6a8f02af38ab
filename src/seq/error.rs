use derive_more::{Display, Error};

/// Returned when an element is requested from a [`Cursor`](super::Cursor) that has none left.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cursor has no more elements")]
pub struct ExhaustedError;

/// Returned by [`Cursor::remove`](super::Cursor::remove), every cursor in this crate is read-only
/// over its source.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cursor does not support removal")]
pub struct UnsupportedOperationError;

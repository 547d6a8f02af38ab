use std::io;

use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("invalid event type specified: {name}")]
pub struct InvalidEventTypeError {
    pub name: String,
}

/// An error raised while setting up a [`Watch`](super::Watch).
#[derive(Debug, Display, From, Error)]
pub enum WatchError {
    Notify(notify::Error),
    Io(io::Error),
    InvalidEventType(InvalidEventTypeError),
}

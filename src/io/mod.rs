//! File-system helpers: reading and writing whole files, finding, filtering and ordering paths,
//! and deleting files or directory trees.
//!
//! Every fallible operation returns an [`IoError`], which wraps the underlying error of whichever
//! library produced it.

mod error;
mod files;
mod read;
mod write;

pub mod path_filtering;
pub mod path_ordering;

pub use error::*;
pub use files::*;
pub use read::*;
pub use write::*;

mod tests;

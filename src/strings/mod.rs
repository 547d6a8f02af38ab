//! String predicates, splitting, joining and formatting.

mod format;
mod strings;

pub use format::*;
pub use strings::*;

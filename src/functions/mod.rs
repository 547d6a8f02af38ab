//! Small building blocks for composing functions.

mod functions;

pub use functions::*;

//! Single-element extraction from an existing [`Cursor`](crate::seq::Cursor).
//!
//! These are the cursor-level counterparts of the functions in [`iterables`](crate::iterables).
//! They consume from the cursor they're given, rather than creating a new one.

mod iterators;

pub use iterators::*;

mod tests;

//! The two abstractions that everything else in this crate is built on.
//!
//! A [`Sequence`] is a re-traversable producer of elements. It never yields elements itself, instead
//! each call to [`Sequence::cursor`] hands out a fresh [`Cursor`], positioned at the first element
//! and entirely independent of any other cursor created from the same sequence. A Cursor is the
//! mutable, single-pass traversal state. This split is what allows the combinators in
//! [`iterables`](crate::iterables) to be lazy without sharing state between traversals.
//!
//! # Absent Sequences
//! Where a "missing" sequence has to be representable, this crate uses [`Option<S>`]: `None` behaves
//! exactly like an empty sequence for every combinator.
//!
//! # Interop
//! Any `IntoIterator + Clone` value can be turned into a Sequence with [`iterable`], and any Cursor
//! can be turned into an [`Iterator`] with [`Cursor::iter`].

mod cursor;
mod error;
mod iter;
mod sequence;
mod source;

pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use sequence::*;
pub use source::*;

mod tests;

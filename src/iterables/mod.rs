//! Lazy combinators over [`Sequence`](crate::seq::Sequence)s.
//!
//! Every combinator here returns a new Sequence without touching its input. Work only happens when
//! a cursor over the result is advanced, and each traversal gets its own cursor chain, so a result
//! can be traversed any number of times.
//!
//! # Counts
//! Counts are signed. Non-positive counts never produce errors, instead they are clamped to a
//! well defined behavior, documented per combinator. For example [`drop(-1, seq)`](drop) yields
//! every element of `seq` and [`take(0, seq)`](take) yields none.

mod access;
mod cycle;
mod ext;
mod join;
mod project;
mod slice;

pub use access::*;
pub use cycle::*;
pub use ext::*;
pub use join::*;
pub use project::*;
pub use slice::*;

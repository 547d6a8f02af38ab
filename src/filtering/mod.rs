//! Predicates and the lazy [`filter`] combinator.
//!
//! Any `FnMut(&T) -> bool` closure is a [`Predicate<T>`]. The combinators here build new predicates
//! out of existing ones, the most important being [`by`], which tests a projection of each element
//! and remembers the projection of every element it has already seen.

mod by;
mod filter;
mod predicate;

pub use by::*;
pub use filter::*;
pub use predicate::*;

mod tests;

//! Comparators, and the eager sorting operations built on them.
//!
//! A [`Comparator<T>`] is anything that can order two borrowed `T`s, every
//! `FnMut(&T, &T) -> Ordering` closure included. Absent values are modeled with [`Option`], which
//! the natural comparators order before every present value.

mod comparator;
mod sort;

pub use comparator::*;
pub use sort::*;

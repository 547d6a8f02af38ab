//! Lazy enumeration of every ordering of a fixed list of elements.
//!
//! Permutations are generated over positions rather than values, so duplicate elements produce
//! duplicate permutations. The order is lexicographic over the index arrays: the first
//! permutation is the input itself and the last is the input reversed.

mod permutations;
mod vectors;

pub use permutations::*;
pub use vectors::*;

mod tests;

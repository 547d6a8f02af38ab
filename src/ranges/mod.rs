//! Lazy arithmetic progressions over the primitive integer types.

mod range;

pub use range::*;

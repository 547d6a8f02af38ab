//! Checked conversions out of [`dyn Any`](std::any::Any) values, used by the dynamically typed
//! option lists of [`maps`](crate::maps) and [`io`](crate::io).

mod classes;

pub use classes::*;

mod tests;

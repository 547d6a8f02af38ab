//! Time unit conversions and measurement of elapsed time.

mod time_unit;
mod timing;

pub use time_unit::*;
pub use timing::*;

mod tests;

//! Helpers for building and querying insertion ordered maps.
//!
//! Maps produced here are [`IndexMap`](indexmap::IndexMap)s, which iterate in insertion order.
//!
//! # Options
//! Some functions in this crate accept loosely typed option lists, a flat slice alternating string
//! keys and values of any type. [`Options`] parses and queries these lists.

mod error;
mod maps;
mod options;

pub use error::*;
pub use maps::*;
pub use options::*;

//! Splitting a [`Sequence`](crate::seq::Sequence) into contiguous runs.
//!
//! Partitions are materialized as [`Vec`]s one at a time, as they're requested. [`group_by`] is
//! the eager, non-contiguous relative of [`partition_by`].

mod grouping;
mod partition;
mod partition_by;
mod push_back;

pub use grouping::*;
pub use partition::*;
pub use partition_by::*;
pub use push_back::*;

//! Blocking directory watching, exposed as a [`Cursor`](crate::seq::Cursor) of events.
//!
//! A [`Watch`] blocks in [`has_more`](crate::seq::Cursor::has_more) until the next event arrives.
//! Waiting can be ended from any thread through an [`Interrupter`], after which the watch reports
//! no more events and [`Watch::is_interrupted`] holds. The watch also ends once every watched
//! directory has been removed.

mod error;
mod event;
mod watch;

pub use error::*;
pub use event::*;
pub use watch::*;

mod tests;

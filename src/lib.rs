//! This crate is a library of lazy sequence combinators, built on a pair of small traits rather than
//! on [`Iterator`] directly.
//!
//! # Purpose
//! A [`Sequence`](seq::Sequence) is something that can be traversed as many times as you like, each
//! traversal getting its own independent [`Cursor`](seq::Cursor). Everything in
//! [`iterables`], [`filtering`], [`partitioning`] and [`permutations`] wraps one sequence in
//! another, without doing any work until a cursor is actually advanced. That means that an
//! infinite sequence like [`cycle`](iterables::cycle) or [`range_of`](ranges::range_of) is
//! perfectly usable, as long as you [`take`](iterables::take) from it before collecting.
//!
//! # Method
//! Cursors follow a two step protocol: [`has_more`](seq::Cursor::has_more) answers whether another
//! element exists (and may do whatever lookahead it needs to find out), then
//! [`take_next`](seq::Cursor::take_next) hands it over. Asking twice never skips an element and
//! taking without asking is fine too. Adapters are plain structs holding their source and their
//! parameters, so they can be cloned, nested and stored without boxing.
//!
//! Besides the combinators, there are some utilities that grew around them: [`ordering`] and
//! [`filtering`] for building comparators and predicates, [`maps`] and [`strings`] helpers, and
//! file-system helpers in [`io`] and [`watching`] behind the `fs` and `watch` features.
//!
//! # Error Handling
//! A missing sequence is an [`Option`], with `None` acting as the empty sequence everywhere, so
//! there's nothing to handle there. Counts are signed and clamped rather than rejected: taking `-1`
//! elements just takes none.
//!
//! Where this crate does return [`Result`]s, the errors are strongly typed: small structs (often
//! ZSTs) implementing [`Error`](std::error::Error), grouped into enums where a function can fail in
//! more than one way. Panics in user-supplied closures aren't caught, they unwind through whichever
//! call advanced the cursor.
//!
//! # Dependencies
//! The core only depends on `derive_more` for error boilerplate, `indexmap` for the maps which have
//! to remember insertion order (like [`frequencies`](iterables::frequencies)), `regex` for
//! splitting strings and `tracing` for the few places that have side effects worth logging.
//!
//! The `fs` feature adds `glob` and `walkdir`, `watch` adds `notify` and `cli` pulls in what the
//! demo binary needs.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod seq;

pub mod filtering;
pub mod iterables;
pub mod iterators;
pub mod ordering;
pub mod partitioning;
pub mod permutations;

pub mod classes;
pub mod functions;
pub mod maps;
pub mod ranges;
pub mod strings;
pub mod timing;

#[cfg(feature = "fs")]
pub mod io;
#[cfg(feature = "watch")]
pub mod watching;

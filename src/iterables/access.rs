use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;

use super::{drop, Dropping};
use crate::seq::{Cursor, Sequence};

/// Returns the first element of the sequence, or [`None`] if it is empty.
pub fn first<S: Sequence>(seq: S) -> Option<S::Item> {
    seq.cursor().next_element()
}

/// Returns every element but the first. Empty if the sequence is empty.
pub fn rest<S: Sequence>(seq: S) -> Dropping<S> {
    drop(1, seq)
}

/// Returns the last element of the sequence, or [`None`] if it is empty. Never returns for an
/// infinite sequence.
pub fn last<S: Sequence>(seq: S) -> Option<S::Item> {
    seq.iter().last()
}

pub fn to_list<S: Sequence>(seq: S) -> Vec<S::Item> {
    seq.iter().collect()
}

pub fn to_set<S>(seq: S) -> HashSet<S::Item>
where
    S: Sequence,
    S::Item: Hash + Eq,
{
    seq.iter().collect()
}

/// Counts the occurrences of each distinct element. Eager.
///
/// The resulting map iterates in the order that each element was first seen.
///
/// # Examples
/// ```
/// # use functional_core::{seq::iterable, iterables::frequencies};
/// let counts = frequencies(iterable("abracadabra".chars()));
/// assert_eq!(counts.into_iter().collect::<Vec<_>>(), [('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]);
/// ```
pub fn frequencies<S>(seq: S) -> IndexMap<S::Item, usize>
where
    S: Sequence,
    S::Item: Hash + Eq,
{
    let mut counts = IndexMap::new();
    for item in seq.iter() {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

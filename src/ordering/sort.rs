use std::cmp::Ordering;
use std::hash::Hash;

use super::{ascending, by, Comparator};
use crate::seq::{Cursor, Sequence};

/// Collects `seq` into a [`Vec`], stably sorted by `comparator`.
pub fn sort<S, C>(mut comparator: C, seq: S) -> Vec<S::Item>
where
    S: Sequence,
    C: Comparator<S::Item>,
{
    let mut sorted: Vec<S::Item> = seq.iter().collect();
    sorted.sort_by(|a, b| comparator.compare(a, b));
    sorted
}

pub fn sort_natural<S>(seq: S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Ord,
{
    sort(ascending(), seq)
}

/// Sorts by the projection of each element through `key`, which is evaluated once per distinct
/// element.
pub fn sort_by<S, F, K, C>(key: K, comparator: C, seq: S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
    K: FnMut(&S::Item) -> F,
    C: Comparator<F>,
{
    sort(by(key, comparator), seq)
}

pub fn sort_by_key<S, F, K>(key: K, seq: S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
    K: FnMut(&S::Item) -> F,
    F: Ord,
{
    sort_by(key, ascending(), seq)
}

/// Checks that no element of `seq` is greater than the one after it. Empty and single element
/// sequences are always sorted.
pub fn is_sorted<S, C>(mut comparator: C, seq: S) -> bool
where
    S: Sequence,
    C: Comparator<S::Item>,
{
    let mut cursor = seq.cursor();
    let Some(mut previous) = cursor.next_element() else {
        return true;
    };
    while let Some(current) = cursor.next_element() {
        if comparator.compare(&previous, &current) == Ordering::Greater {
            return false;
        }
        previous = current;
    }
    true
}

pub fn is_sorted_natural<S>(seq: S) -> bool
where
    S: Sequence,
    S::Item: Ord,
{
    is_sorted(ascending(), seq)
}

pub fn is_sorted_by<S, F, K, C>(key: K, comparator: C, seq: S) -> bool
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
    K: FnMut(&S::Item) -> F,
    C: Comparator<F>,
{
    is_sorted(by(key, comparator), seq)
}

/// Sorts `seq` by `comparator`, keeping only the first element seen from each run of equivalent
/// elements, the way an ordered set would.
pub fn sorted_set<S, C>(mut comparator: C, seq: S) -> Vec<S::Item>
where
    S: Sequence,
    C: Comparator<S::Item>,
{
    let mut sorted: Vec<S::Item> = seq.iter().collect();
    sorted.sort_by(|a, b| comparator.compare(a, b));
    sorted.dedup_by(|later, kept| comparator.compare(kept, later) == Ordering::Equal);
    sorted
}

pub fn sorted_set_natural<S>(seq: S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Ord,
{
    sorted_set(ascending(), seq)
}

pub fn sorted_set_by<S, F, K, C>(key: K, comparator: C, seq: S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
    K: FnMut(&S::Item) -> F,
    C: Comparator<F>,
{
    sorted_set(by(key, comparator), seq)
}

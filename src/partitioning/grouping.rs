use std::hash::Hash;

use indexmap::IndexMap;

use crate::seq::Sequence;

/// Groups every element of `seq` by its key. Eager.
///
/// Unlike [`partition_by`](super::partition_by), members of a group don't need to be contiguous.
/// Groups iterate in the order their keys were first seen, and members keep their relative order.
pub fn group_by<S, K, F>(mut key: K, seq: S) -> IndexMap<F, Vec<S::Item>>
where
    S: Sequence,
    K: FnMut(&S::Item) -> F,
    F: Hash + Eq,
{
    let mut groups: IndexMap<F, Vec<S::Item>> = IndexMap::new();
    for item in seq.iter() {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

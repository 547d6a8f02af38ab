use std::collections::HashMap;
use std::hash::Hash;

use super::{filter, present, Filter, Predicate};
use crate::seq::Sequence;

/// Tests the projection of each value through `key`, rather than the value itself.
///
/// Projections are memoized per input value for the lifetime of the returned predicate, so `key`
/// is evaluated at most once per distinct value no matter how many times it is tested. A clone of
/// the predicate carries a copy of the memo at the time it was cloned.
pub fn by<T, F, K, P>(key: K, predicate: P) -> By<T, F, K, P>
where
    T: Hash + Eq + Clone,
    K: FnMut(&T) -> F,
    P: Predicate<F>,
{
    By {
        key,
        predicate,
        memo: HashMap::new(),
    }
}

/// Holds for values whose projection through `key` is present.
pub fn by_present<T, F, K>(key: K) -> By<T, Option<F>, K, impl Predicate<Option<F>> + Copy>
where
    T: Hash + Eq + Clone,
    K: FnMut(&T) -> Option<F>,
{
    by(key, present())
}

/// Filters `seq` by testing the projection of each element, see [`by`].
pub fn filter_by<S, F, K, P>(key: K, predicate: P, seq: S) -> Filter<S, By<S::Item, F, K, P>>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
    F: Clone,
    K: FnMut(&S::Item) -> F + Clone,
    P: Predicate<F> + Clone,
{
    filter(by(key, predicate), seq)
}

#[derive(Clone)]
pub struct By<T, F, K, P> {
    pub(crate) key: K,
    pub(crate) predicate: P,
    pub(crate) memo: HashMap<T, F>,
}

impl<T, F, K, P> Predicate<T> for By<T, F, K, P>
where
    T: Hash + Eq + Clone,
    K: FnMut(&T) -> F,
    P: Predicate<F>,
{
    fn test(&mut self, value: &T) -> bool {
        if !self.memo.contains_key(value) {
            let projected = (self.key)(value);
            self.memo.insert(value.clone(), projected);
        }
        self.predicate.test(&self.memo[value])
    }
}

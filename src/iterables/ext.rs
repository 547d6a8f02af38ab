use super::*;
use crate::filtering::{filter, Filter, Predicate};
use crate::partitioning::{partition, partition_by, Partitioned, PartitionedBy};
use crate::seq::Sequence;

/// Method syntax for the combinators of this crate, implemented for every [`Sequence`].
///
/// # Examples
/// ```
/// # use functional_core::{seq::{iterable, Sequence}, iterables::SequenceExt};
/// let seq = iterable(1..).filter(|x: &i32| x % 3 == 0).drop(1).take(3);
/// assert_eq!(seq.to_list(), [6, 9, 12]);
/// ```
pub trait SequenceExt: Sequence + Sized {
    fn concat<B: Sequence<Item = Self::Item>>(self, other: B) -> Concat<Self, B> {
        concat(self, other)
    }

    fn cons(self, head: Self::Item) -> Cons<Self>
    where
        Self::Item: Clone,
    {
        cons(head, self)
    }

    fn conj(self, tail: Self::Item) -> Conj<Self>
    where
        Self::Item: Clone,
    {
        conj(self, tail)
    }

    fn drop(self, n: isize) -> Dropping<Self> {
        drop(n, self)
    }

    fn drop_last(self, n: isize) -> DroppingLast<Self> {
        drop_last(n, self)
    }

    fn take(self, n: isize) -> Taking<Self> {
        take(n, self)
    }

    fn take_last(self, n: isize) -> TakingLast<Self> {
        take_last(n, self)
    }

    fn take_nth(self, n: isize) -> TakingNth<Self> {
        take_nth(n, self)
    }

    fn cycle(self) -> Cycling<Self> {
        cycle(self)
    }

    fn enumerate(self) -> Enumerated<Self> {
        enumerate(self)
    }

    fn map<F, B>(self, f: F) -> Mapped<Self, F>
    where
        F: FnMut(Self::Item) -> B + Clone,
    {
        map(f, self)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Predicate<Self::Item> + Clone,
    {
        filter(predicate, self)
    }

    fn partition(self, size: isize) -> Partitioned<Self> {
        partition(size, self)
    }

    fn partition_by<K, F>(self, key: K) -> PartitionedBy<Self, K>
    where
        K: FnMut(&Self::Item) -> F + Clone,
        F: PartialEq,
    {
        partition_by(key, self)
    }

    fn to_list(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }
}

impl<S: Sequence> SequenceExt for S {}

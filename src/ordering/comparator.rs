use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// A total order over borrowed values of `T`.
///
/// Comparators take `&mut self` so that they can carry state, such as the memo of [`by`].
/// Implemented for every `FnMut(&T, &T) -> Ordering`.
pub trait Comparator<T: ?Sized> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F: FnMut(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Combinators available on every [`Comparator`].
pub trait ComparatorExt<T: ?Sized>: Comparator<T> + Sized {
    /// Breaks ties of this comparator with `next`.
    fn then<C: Comparator<T>>(self, next: C) -> Then<Self, C> {
        Then(self, next)
    }

    fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<T: ?Sized, C: Comparator<T>> ComparatorExt<T> for C {}

/// Compares `a` and `b` with `comparator`.
pub fn compare<T: ?Sized, C: Comparator<T>>(mut comparator: C, a: &T, b: &T) -> Ordering {
    comparator.compare(a, b)
}

/// Renders an [`Ordering`] as a relational operator: `<`, `~` (equivalent) or `>`.
pub const fn op(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "~",
        Ordering::Greater => ">",
    }
}

/// The natural order of `T`. See [`ascending`].
pub struct Ascending<T: ?Sized>(PhantomData<fn(&T)>);

/// The reverse of the natural order of `T`. See [`descending`].
pub struct Descending<T: ?Sized>(PhantomData<fn(&T)>);

/// Orders values naturally, smallest first. For [`Option`]s, `None` comes before any `Some`.
pub const fn ascending<T: Ord + ?Sized>() -> Ascending<T> {
    Ascending(PhantomData)
}

/// Orders values naturally, largest first. For [`Option`]s, `None` comes after any `Some`.
pub const fn descending<T: Ord + ?Sized>() -> Descending<T> {
    Descending(PhantomData)
}

impl<T: ?Sized> Clone for Ascending<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Ascending<T> {}

impl<T: Ord + ?Sized> Comparator<T> for Ascending<T> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized> Clone for Descending<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Descending<T> {}

impl<T: Ord + ?Sized> Comparator<T> for Descending<T> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(C);

/// Swaps the arguments of `comparator`.
pub const fn reversed<C>(comparator: C) -> Reversed<C> {
    Reversed(comparator)
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Then<A, B>(A, B);

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Then<A, B> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        match self.0.compare(a, b) {
            Ordering::Equal => self.1.compare(a, b),
            ordering => ordering,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Or<C>(Vec<C>);

/// Lexicographic composition: the first non-equal result of `comparators`, in order, or
/// [`Equal`](Ordering::Equal) if they all agree.
///
/// For a fixed pair of comparators of different types, see [`ComparatorExt::then`].
pub fn or<C>(comparators: impl IntoIterator<Item = C>) -> Or<C> {
    Or(comparators.into_iter().collect())
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Or<C> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        for comparator in self.0.iter_mut() {
            match comparator.compare(a, b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

/// Orders values by their projection through `key`, as ordered by `comparator`.
///
/// Projections are memoized per input value for the lifetime of the returned comparator. A sort
/// compares the same element many times, but `key` is only evaluated once for each.
pub fn by<T, F, K, C>(key: K, comparator: C) -> By<T, F, K, C>
where
    T: Hash + Eq + Clone,
    K: FnMut(&T) -> F,
    C: Comparator<F>,
{
    By {
        key,
        comparator,
        memo: HashMap::new(),
    }
}

/// Orders values by the natural, ascending order of their projection through `key`.
pub fn by_key<T, F, K>(key: K) -> By<T, F, K, Ascending<F>>
where
    T: Hash + Eq + Clone,
    K: FnMut(&T) -> F,
    F: Ord,
{
    by(key, ascending())
}

#[derive(Clone)]
pub struct By<T, F, K, C> {
    pub(crate) key: K,
    pub(crate) comparator: C,
    pub(crate) memo: HashMap<T, F>,
}

impl<T, F, K, C> By<T, F, K, C>
where
    T: Hash + Eq + Clone,
    K: FnMut(&T) -> F,
{
    fn memoize(&mut self, value: &T) {
        if !self.memo.contains_key(value) {
            let projected = (self.key)(value);
            self.memo.insert(value.clone(), projected);
        }
    }
}

impl<T, F, K, C> Comparator<T> for By<T, F, K, C>
where
    T: Hash + Eq + Clone,
    K: FnMut(&T) -> F,
    C: Comparator<F>,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.memoize(a);
        self.memoize(b);
        self.comparator.compare(&self.memo[a], &self.memo[b])
    }
}

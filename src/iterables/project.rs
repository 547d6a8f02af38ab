use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Lazily applies `f` to each element of `seq`.
///
/// `f` is cloned for every traversal, so that traversals stay independent.
pub fn map<S, F, B>(f: F, seq: S) -> Mapped<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B + Clone,
{
    Mapped {
        f,
        seq,
    }
}

/// Maps `inner` over the sequence, then hands the mapped sequence to `outer`.
///
/// # Examples
/// ```
/// # use functional_core::{seq::iterable, iterables::{walk, to_list}};
/// let total: i32 = walk(|x: i32| x * 2, |seq| to_list(seq).into_iter().sum::<i32>(), iterable(1..=3));
/// assert_eq!(total, 12);
/// ```
pub fn walk<S, F, B, O, R>(inner: F, outer: O, seq: S) -> R
where
    S: Sequence,
    F: FnMut(S::Item) -> B + Clone,
    O: FnOnce(Mapped<S, F>) -> R,
{
    outer(map(inner, seq))
}

/// Projects the first element of each pair.
pub fn keys<S, K, V>(seq: S) -> Keys<S>
where
    S: Sequence<Item = (K, V)>,
{
    Keys {
        seq,
    }
}

/// Projects the second element of each pair.
pub fn values<S, K, V>(seq: S) -> Values<S>
where
    S: Sequence<Item = (K, V)>,
{
    Values {
        seq,
    }
}

/// Yields, for as long as every input has more, a [`Vec`] holding the next element of each.
///
/// With no inputs the result is empty.
pub fn interleave<S: Sequence>(seqs: impl IntoIterator<Item = S>) -> Interleaved<S> {
    Interleaved {
        seqs: seqs.into_iter().collect(),
    }
}

#[derive(Debug, Clone)]
pub struct Mapped<S, F> {
    pub(crate) f: F,
    pub(crate) seq: S,
}

impl<S, F, B> Sequence for Mapped<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B + Clone,
{
    type Item = B;

    type Cursor = MappedCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MappedCursor {
            f: self.f.clone(),
            cursor: self.seq.cursor(),
        }
    }
}

pub struct MappedCursor<C, F> {
    pub(crate) f: F,
    pub(crate) cursor: C,
}

impl<C, F, B> Cursor for MappedCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    type Item = B;

    fn has_more(&mut self) -> bool {
        self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        self.cursor.take_next().map(&mut self.f)
    }
}

#[derive(Debug, Clone)]
pub struct Keys<S> {
    pub(crate) seq: S,
}

impl<S, K, V> Sequence for Keys<S>
where
    S: Sequence<Item = (K, V)>,
{
    type Item = K;

    type Cursor = KeysCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        KeysCursor(self.seq.cursor())
    }
}

pub struct KeysCursor<C>(pub(crate) C);

impl<C, K, V> Cursor for KeysCursor<C>
where
    C: Cursor<Item = (K, V)>,
{
    type Item = K;

    fn has_more(&mut self) -> bool {
        self.0.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        self.0.take_next().map(|(key, _)| key)
    }
}

#[derive(Debug, Clone)]
pub struct Values<S> {
    pub(crate) seq: S,
}

impl<S, K, V> Sequence for Values<S>
where
    S: Sequence<Item = (K, V)>,
{
    type Item = V;

    type Cursor = ValuesCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ValuesCursor(self.seq.cursor())
    }
}

pub struct ValuesCursor<C>(pub(crate) C);

impl<C, K, V> Cursor for ValuesCursor<C>
where
    C: Cursor<Item = (K, V)>,
{
    type Item = V;

    fn has_more(&mut self) -> bool {
        self.0.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        self.0.take_next().map(|(_, value)| value)
    }
}

#[derive(Debug, Clone)]
pub struct Interleaved<S> {
    pub(crate) seqs: Vec<S>,
}

impl<S: Sequence> Sequence for Interleaved<S> {
    type Item = Vec<S::Item>;

    type Cursor = InterleavedCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        InterleavedCursor {
            cursors: self.seqs.iter().map(Sequence::cursor).collect(),
        }
    }
}

pub struct InterleavedCursor<C> {
    pub(crate) cursors: Vec<C>,
}

impl<C: Cursor> Cursor for InterleavedCursor<C> {
    type Item = Vec<C::Item>;

    fn has_more(&mut self) -> bool {
        !self.cursors.is_empty() && self.cursors.iter_mut().all(Cursor::has_more)
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if !self.has_more() {
            return Err(ExhaustedError);
        }
        self.cursors.iter_mut().map(Cursor::take_next).collect()
    }
}

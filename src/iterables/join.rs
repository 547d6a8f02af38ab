use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Yields every element of `first` followed by every element of `second`.
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Concat {
        first,
        second,
    }
}

/// Concatenates any number of sequences of the same type, in order. Wrap them in [`Option`] to
/// allow for absent sequences, which are treated as empty.
pub fn concat_all<S: Sequence>(seqs: impl IntoIterator<Item = S>) -> ConcatAll<S> {
    ConcatAll {
        seqs: seqs.into_iter().collect(),
    }
}

/// Prepends a single element to the sequence.
pub fn cons<S>(head: S::Item, seq: S) -> Cons<S>
where
    S: Sequence,
    S::Item: Clone,
{
    Cons {
        head,
        seq,
    }
}

/// Appends a single element to the sequence.
pub fn conj<S>(seq: S, tail: S::Item) -> Conj<S>
where
    S: Sequence,
    S::Item: Clone,
{
    Conj {
        seq,
        tail,
    }
}

#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ConcatCursor {
            first: self.first.cursor(),
            second: self.second.cursor(),
        }
    }
}

pub struct ConcatCursor<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn has_more(&mut self) -> bool {
        self.first.has_more() || self.second.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if self.first.has_more() {
            self.first.take_next()
        } else {
            self.second.take_next()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConcatAll<S> {
    pub(crate) seqs: Vec<S>,
}

impl<S: Sequence> Sequence for ConcatAll<S> {
    type Item = S::Item;

    type Cursor = ConcatAllCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ConcatAllCursor {
            cursors: self.seqs.iter().map(Sequence::cursor).collect(),
            index: 0,
        }
    }
}

pub struct ConcatAllCursor<C> {
    pub(crate) cursors: Vec<C>,
    pub(crate) index: usize,
}

impl<C: Cursor> ConcatAllCursor<C> {
    // Moves past exhausted cursors, returning false once none remain.
    fn advance(&mut self) -> bool {
        while let Some(cursor) = self.cursors.get_mut(self.index) {
            if cursor.has_more() {
                return true;
            }
            self.index += 1;
        }
        false
    }
}

impl<C: Cursor> Cursor for ConcatAllCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.advance()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if !self.advance() {
            return Err(ExhaustedError);
        }
        self.cursors.get_mut(self.index).ok_or(ExhaustedError)?.take_next()
    }
}

#[derive(Debug, Clone)]
pub struct Cons<S: Sequence> {
    pub(crate) head: S::Item,
    pub(crate) seq: S,
}

impl<S> Sequence for Cons<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    type Cursor = ConsCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ConsCursor {
            head: Some(self.head.clone()),
            cursor: self.seq.cursor(),
        }
    }
}

pub struct ConsCursor<C: Cursor> {
    pub(crate) head: Option<C::Item>,
    pub(crate) cursor: C,
}

impl<C: Cursor> Cursor for ConsCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.head.is_some() || self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        match self.head.take() {
            Some(head) => Ok(head),
            None => self.cursor.take_next(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Conj<S: Sequence> {
    pub(crate) seq: S,
    pub(crate) tail: S::Item,
}

impl<S> Sequence for Conj<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    type Cursor = ConjCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ConjCursor {
            cursor: self.seq.cursor(),
            tail: Some(self.tail.clone()),
        }
    }
}

pub struct ConjCursor<C: Cursor> {
    pub(crate) cursor: C,
    pub(crate) tail: Option<C::Item>,
}

impl<C: Cursor> Cursor for ConjCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.tail.is_some() || self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if self.cursor.has_more() {
            self.cursor.take_next()
        } else {
            self.tail.take().ok_or(ExhaustedError)
        }
    }
}

use std::rc::Rc;

use super::{Cursor, CursorIter};

/// A re-traversable, possibly infinite, possibly lazily computed list of elements.
///
/// Every call to [`cursor`](Sequence::cursor) must return a fresh cursor starting at the first
/// element. Combinators never share cursor state between traversals, so traversing a sequence
/// twice (or twice at the same time) yields the same elements both times, provided the functions
/// it was built from are pure.
pub trait Sequence {
    type Item;

    type Cursor: Cursor<Item = Self::Item>;

    /// Creates a new cursor, positioned at the first element.
    fn cursor(&self) -> Self::Cursor;

    /// Creates a new [`Iterator`] over all elements of the sequence.
    fn iter(&self) -> CursorIter<Self::Cursor> {
        self.cursor().iter()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;

    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

/// `None` is the empty sequence.
impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    type Cursor = Option<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        self.as_ref().map(Sequence::cursor)
    }
}

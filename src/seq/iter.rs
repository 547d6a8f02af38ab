use std::iter::FusedIterator;

use super::{Cursor, ExhaustedError};

/// A type for iteration over the remaining elements of a [`Cursor`].
///
/// See [`Cursor::iter`] and [`Sequence::iter`](super::Sequence::iter).
pub struct CursorIter<C: Cursor> {
    pub(crate) cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    /// Returns the cursor, positioned after the last element yielded by this iterator.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_element()
    }
}

/// A [`Cursor`] over any [`Iterator`], with a single element of lookahead so that
/// [`has_more`](Cursor::has_more) can be answered.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    pub(crate) inner: I,
    pub(crate) peeked: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> IterCursor<I> {
        IterCursor {
            inner: iter.into_iter(),
            peeked: None,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_more(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.inner.next();
        }
        self.peeked.is_some()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        match self.peeked.take() {
            Some(item) => Ok(item),
            None => self.inner.next().ok_or(ExhaustedError),
        }
    }
}

impl<I: FusedIterator> FusedIterator for CursorIter<IterCursor<I>> {}

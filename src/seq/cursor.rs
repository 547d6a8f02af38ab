use super::{CursorIter, ExhaustedError, UnsupportedOperationError};

/// Single-pass traversal state over a [`Sequence`](super::Sequence).
///
/// # Contract
/// - [`has_more`](Cursor::has_more) may be called any number of times between two calls to
///   [`take_next`](Cursor::take_next), all of them will agree. It may do work (a filtering cursor
///   has to look ahead to answer it) but never skips an element.
/// - `take_next` does not require a preceding `has_more`. It returns the next element when one
///   exists and [`ExhaustedError`] otherwise. Two consecutive calls return two consecutive
///   elements, never the same one twice.
/// - There is no rewind. Ask the sequence for a new cursor instead.
///
/// Panics raised by user-supplied functions inside a cursor (predicates, keys, comparators) are
/// never caught and unwind through the caller of `has_more` / `take_next`.
pub trait Cursor {
    type Item;

    /// Returns true if [`take_next`](Cursor::take_next) would produce an element.
    fn has_more(&mut self) -> bool;

    /// Advances the cursor, returning the element it passed over.
    ///
    /// # Errors
    /// Returns [`ExhaustedError`] if the cursor has no more elements.
    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError>;

    /// Removal through a cursor is not supported by anything in this crate.
    ///
    /// # Errors
    /// Always returns [`UnsupportedOperationError`].
    fn remove(&mut self) -> Result<(), UnsupportedOperationError> {
        Err(UnsupportedOperationError)
    }

    /// Combines `has_more` and `take_next`, returning [`None`] once exhausted.
    fn next_element(&mut self) -> Option<Self::Item> {
        if self.has_more() {
            self.take_next().ok()
        } else {
            None
        }
    }

    /// Converts this cursor into a standard [`Iterator`].
    fn iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter {
            cursor: self,
        }
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        (**self).take_next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        (**self).take_next()
    }
}

// An absent cursor is an exhausted one.
impl<C: Cursor> Cursor for Option<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.as_mut().is_some_and(|cursor| cursor.has_more())
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        match self {
            Some(cursor) => cursor.take_next(),
            None => Err(ExhaustedError),
        }
    }
}

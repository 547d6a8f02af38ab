use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::rc::Rc;

use super::{Cursor, ExhaustedError, IterCursor, Sequence};

/// A [`Sequence`] backed by a cloneable [`IntoIterator`], which is cloned for every traversal.
///
/// See [`iterable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iterable<I>(pub(crate) I);

/// Wraps any cloneable [`IntoIterator`], for example a [`Vec`], a borrowed slice or a range, as a
/// [`Sequence`].
///
/// # Examples
/// ```
/// # use functional_core::seq::{iterable, Sequence};
/// let seq = iterable(vec![1, 2, 3]);
/// assert_eq!(seq.iter().collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(seq.iter().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn iterable<I: IntoIterator + Clone>(source: I) -> Iterable<I> {
    Iterable(source)
}

impl<I: IntoIterator + Clone> Iterable<I> {
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I: IntoIterator + Clone> Sequence for Iterable<I> {
    type Item = I::Item;

    type Cursor = IterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.0.clone())
    }
}

/// A [`Sequence`] over a fixed, shared array of elements. Traversal yields clones.
///
/// See [`as_iterable`].
pub struct Elements<T> {
    pub(crate) elements: Rc<[T]>,
}

/// Creates a [`Sequence`] over the provided elements.
pub fn as_iterable<T: Clone>(elements: impl Into<Rc<[T]>>) -> Elements<T> {
    Elements {
        elements: elements.into(),
    }
}

/// Creates a single [`Cursor`] over the provided elements.
pub fn as_cursor<T: Clone>(elements: impl Into<Rc<[T]>>) -> ElementsCursor<T> {
    ElementsCursor {
        elements: elements.into(),
        index: 0,
    }
}

impl<T> Clone for Elements<T> {
    fn clone(&self) -> Self {
        Elements {
            elements: Rc::clone(&self.elements),
        }
    }
}

impl<T: Debug> Debug for Elements<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: Clone> Sequence for Elements<T> {
    type Item = T;

    type Cursor = ElementsCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        ElementsCursor {
            elements: Rc::clone(&self.elements),
            index: 0,
        }
    }
}

pub struct ElementsCursor<T> {
    pub(crate) elements: Rc<[T]>,
    pub(crate) index: usize,
}

impl<T: Clone> Cursor for ElementsCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.index < self.elements.len()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        let item = self.elements.get(self.index).cloned().ok_or(ExhaustedError)?;
        self.index += 1;
        Ok(item)
    }
}

/// The empty [`Sequence`], see [`empty`].
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Creates a [`Sequence`] with no elements.
pub const fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Debug for Empty<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Empty")
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    type Cursor = EmptyCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        EmptyCursor(PhantomData)
    }
}

pub struct EmptyCursor<T>(PhantomData<fn() -> T>);

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        false
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        Err(ExhaustedError)
    }
}

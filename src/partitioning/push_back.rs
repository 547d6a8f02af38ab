use crate::seq::{Cursor, ExhaustedError};

/// A cursor wrapper that can take back a single element it has already yielded.
///
/// A pushed element is always yielded before anything else from the inner cursor.
pub struct PushBack<C: Cursor> {
    pushed: Option<C::Item>,
    inner: C,
}

impl<C: Cursor> PushBack<C> {
    pub const fn new(inner: C) -> PushBack<C> {
        PushBack {
            pushed: None,
            inner,
        }
    }

    /// Returns `item` to the front of the cursor.
    ///
    /// Only one element can be held at a time. Pushing a second before the first has been taken
    /// again is a logic error, which replaces the first (and panics in debug builds).
    pub fn push_back(&mut self, item: C::Item) {
        debug_assert!(
            self.pushed.is_none(),
            "PushBack already holds an element"
        );
        self.pushed = Some(item);
    }

    pub const fn has_pushed(&self) -> bool {
        self.pushed.is_some()
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Cursor> Cursor for PushBack<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.pushed.is_some() || self.inner.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        match self.pushed.take() {
            Some(item) => Ok(item),
            None => self.inner.take_next(),
        }
    }
}

use std::rc::Rc;

use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Repeats the sequence forever, by creating a new cursor each time the current one runs out.
///
/// An empty sequence stays empty rather than looping.
pub fn cycle<S: Sequence>(seq: S) -> Cycling<S> {
    Cycling {
        seq: Rc::new(seq),
    }
}

/// Pairs each element with its zero-based position.
pub fn enumerate<S: Sequence>(seq: S) -> Enumerated<S> {
    Enumerated {
        seq,
    }
}

#[derive(Debug)]
pub struct Cycling<S> {
    pub(crate) seq: Rc<S>,
}

impl<S> Clone for Cycling<S> {
    fn clone(&self) -> Self {
        Cycling {
            seq: Rc::clone(&self.seq),
        }
    }
}

impl<S: Sequence> Sequence for Cycling<S> {
    type Item = S::Item;

    type Cursor = CyclingCursor<S>;

    fn cursor(&self) -> Self::Cursor {
        CyclingCursor {
            cursor: self.seq.cursor(),
            seq: Rc::clone(&self.seq),
        }
    }
}

pub struct CyclingCursor<S: Sequence> {
    pub(crate) seq: Rc<S>,
    pub(crate) cursor: S::Cursor,
}

impl<S: Sequence> Cursor for CyclingCursor<S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        if !self.cursor.has_more() {
            self.cursor = self.seq.cursor();
        }
        self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if !self.has_more() {
            return Err(ExhaustedError);
        }
        self.cursor.take_next()
    }
}

#[derive(Debug, Clone)]
pub struct Enumerated<S> {
    pub(crate) seq: S,
}

impl<S: Sequence> Sequence for Enumerated<S> {
    type Item = (u64, S::Item);

    type Cursor = EnumeratedCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        EnumeratedCursor {
            index: 0,
            cursor: self.seq.cursor(),
        }
    }
}

pub struct EnumeratedCursor<C> {
    pub(crate) index: u64,
    pub(crate) cursor: C,
}

impl<C: Cursor> Cursor for EnumeratedCursor<C> {
    type Item = (u64, C::Item);

    fn has_more(&mut self) -> bool {
        self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        let item = self.cursor.take_next()?;
        let index = self.index;
        self.index += 1;
        Ok((index, item))
    }
}

use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Skips the first `n` elements of `seq`. For `n <= 0` every element is kept, for `n` greater than
/// the length of `seq` the result is empty.
pub fn drop<S: Sequence>(n: isize, seq: S) -> Dropping<S> {
    Dropping {
        count: n.max(0).unsigned_abs(),
        seq,
    }
}

/// Omits the last `n` elements of `seq`. For `n <= 0` every element is kept.
///
/// The result remains lazy: a lead cursor runs `n` elements ahead of the cursor that elements are
/// taken from and traversal stops when the lead is exhausted.
pub fn drop_last<S: Sequence>(n: isize, seq: S) -> DroppingLast<S> {
    DroppingLast {
        count: n.max(0).unsigned_abs(),
        seq,
    }
}

pub fn drop_last_one<S: Sequence>(seq: S) -> DroppingLast<S> {
    drop_last(1, seq)
}

/// Yields at most the first `n` elements of `seq`. For `n <= 0` the result is empty.
pub fn take<S: Sequence>(n: isize, seq: S) -> Taking<S> {
    Taking {
        count: n.max(0).unsigned_abs(),
        seq,
    }
}

/// Yields at most the last `n` elements of `seq`. For `n <= 0` the result is empty.
///
/// Uses the same lead / lag technique as [`drop_last`], although the whole of `seq` has to be
/// traversed before the first element can be yielded.
pub fn take_last<S: Sequence>(n: isize, seq: S) -> TakingLast<S> {
    TakingLast {
        count: n.max(0).unsigned_abs(),
        seq,
    }
}

/// Yields every `n`th element of `seq`, starting with the first. For `n <= 1` every element is
/// yielded.
pub fn take_nth<S: Sequence>(n: isize, seq: S) -> TakingNth<S> {
    TakingNth {
        step: n.max(1).unsigned_abs(),
        seq,
    }
}

fn skip<C: Cursor>(cursor: &mut C, mut count: usize) {
    while count > 0 && cursor.has_more() {
        let _ = cursor.take_next();
        count -= 1;
    }
}

#[derive(Debug, Clone)]
pub struct Dropping<S> {
    pub(crate) count: usize,
    pub(crate) seq: S,
}

impl<S: Sequence> Sequence for Dropping<S> {
    type Item = S::Item;

    type Cursor = DroppingCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        DroppingCursor::new(self.count, self.seq.cursor())
    }
}

/// Lazily skips a number of elements the first time it is queried.
pub struct DroppingCursor<C> {
    pub(crate) pending: usize,
    pub(crate) cursor: C,
}

impl<C: Cursor> DroppingCursor<C> {
    pub(crate) const fn new(pending: usize, cursor: C) -> DroppingCursor<C> {
        DroppingCursor {
            pending,
            cursor,
        }
    }

    fn skip_pending(&mut self) {
        if self.pending > 0 {
            skip(&mut self.cursor, self.pending);
            self.pending = 0;
        }
    }
}

impl<C: Cursor> Cursor for DroppingCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.skip_pending();
        self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        self.skip_pending();
        self.cursor.take_next()
    }
}

#[derive(Debug, Clone)]
pub struct DroppingLast<S> {
    pub(crate) count: usize,
    pub(crate) seq: S,
}

impl<S: Sequence> Sequence for DroppingLast<S> {
    type Item = S::Item;

    type Cursor = DroppingLastCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        DroppingLastCursor {
            lead: DroppingCursor::new(self.count, self.seq.cursor()),
            lag: self.seq.cursor(),
        }
    }
}

pub struct DroppingLastCursor<C> {
    pub(crate) lead: DroppingCursor<C>,
    pub(crate) lag: C,
}

impl<C: Cursor> Cursor for DroppingLastCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.lead.has_more() && self.lag.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        self.lead.take_next()?;
        self.lag.take_next()
    }
}

#[derive(Debug, Clone)]
pub struct Taking<S> {
    pub(crate) count: usize,
    pub(crate) seq: S,
}

impl<S: Sequence> Sequence for Taking<S> {
    type Item = S::Item;

    type Cursor = TakingCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakingCursor {
            remaining: self.count,
            cursor: self.seq.cursor(),
        }
    }
}

pub struct TakingCursor<C> {
    pub(crate) remaining: usize,
    pub(crate) cursor: C,
}

impl<C: Cursor> Cursor for TakingCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.remaining > 0 && self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if self.remaining == 0 {
            return Err(ExhaustedError);
        }
        let item = self.cursor.take_next()?;
        self.remaining -= 1;
        Ok(item)
    }
}

#[derive(Debug, Clone)]
pub struct TakingLast<S> {
    pub(crate) count: usize,
    pub(crate) seq: S,
}

impl<S: Sequence> Sequence for TakingLast<S> {
    type Item = S::Item;

    type Cursor = TakingLastCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakingLastCursor {
            lead: Some(DroppingCursor::new(self.count, self.seq.cursor())),
            cursor: self.seq.cursor(),
        }
    }
}

pub struct TakingLastCursor<C> {
    pub(crate) lead: Option<DroppingCursor<C>>,
    pub(crate) cursor: C,
}

impl<C: Cursor> TakingLastCursor<C> {
    // Steps both cursors together until the lead runs out, at which point the trailing cursor is
    // positioned over the window to yield.
    fn align(&mut self) {
        if let Some(mut lead) = self.lead.take() {
            while lead.has_more() && self.cursor.has_more() {
                let _ = lead.take_next();
                let _ = self.cursor.take_next();
            }
        }
    }
}

impl<C: Cursor> Cursor for TakingLastCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.align();
        self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        self.align();
        self.cursor.take_next()
    }
}

#[derive(Debug, Clone)]
pub struct TakingNth<S> {
    pub(crate) step: usize,
    pub(crate) seq: S,
}

impl<S: Sequence> Sequence for TakingNth<S> {
    type Item = S::Item;

    type Cursor = TakingNthCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakingNthCursor {
            step: self.step,
            inner: DroppingCursor::new(0, self.seq.cursor()),
        }
    }
}

pub struct TakingNthCursor<C> {
    pub(crate) step: usize,
    pub(crate) inner: DroppingCursor<C>,
}

impl<C: Cursor> Cursor for TakingNthCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.inner.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        let item = self.inner.take_next()?;
        // The skipped elements are only consumed once the following element is requested.
        self.inner.pending = self.step - 1;
        Ok(item)
    }
}

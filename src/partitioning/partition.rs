use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Splits `seq` into chunks of `size` elements. The final chunk may be shorter.
///
/// # Degenerate Sizes
/// For `size <= 0` and a non-empty `seq`, the result is an infinite sequence of empty chunks,
/// because no progress is ever made through `seq`. Only take a bounded prefix of such a result.
pub fn partition<S: Sequence>(size: isize, seq: S) -> Partitioned<S> {
    Partitioned {
        size: size.max(0).unsigned_abs(),
        seq,
    }
}

#[derive(Debug, Clone)]
pub struct Partitioned<S> {
    pub(crate) size: usize,
    pub(crate) seq: S,
}

impl<S: Sequence> Sequence for Partitioned<S> {
    type Item = Vec<S::Item>;

    type Cursor = PartitionedCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        PartitionedCursor {
            size: self.size,
            cursor: self.seq.cursor(),
        }
    }
}

pub struct PartitionedCursor<C> {
    pub(crate) size: usize,
    pub(crate) cursor: C,
}

impl<C: Cursor> Cursor for PartitionedCursor<C> {
    type Item = Vec<C::Item>;

    fn has_more(&mut self) -> bool {
        self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if !self.cursor.has_more() {
            return Err(ExhaustedError);
        }
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.cursor.next_element() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        Ok(chunk)
    }
}

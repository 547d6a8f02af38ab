use super::Predicate;
use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Keeps only the elements of `seq` for which `predicate` holds, preserving their order.
///
/// The predicate is evaluated as traversal reaches each element, never in advance. Each traversal
/// uses its own clone of the predicate.
pub fn filter<S, P>(predicate: P, seq: S) -> Filter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    Filter {
        predicate,
        seq,
    }
}

#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    pub(crate) predicate: P,
    pub(crate) seq: S,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;

    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            predicate: self.predicate.clone(),
            cursor: self.seq.cursor(),
            next: None,
        }
    }
}

pub struct FilterCursor<C: Cursor, P> {
    pub(crate) predicate: P,
    pub(crate) cursor: C,
    pub(crate) next: Option<C::Item>,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        while self.next.is_none() {
            match self.cursor.next_element() {
                Some(item) if self.predicate.test(&item) => self.next = Some(item),
                Some(_) => (),
                None => return false,
            }
        }
        true
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if self.has_more() {
            self.next.take().ok_or(ExhaustedError)
        } else {
            Err(ExhaustedError)
        }
    }
}

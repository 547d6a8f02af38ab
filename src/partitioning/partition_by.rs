use super::PushBack;
use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Splits `seq` into maximal runs of elements with equal keys, preserving order.
///
/// A new partition begins exactly when the key differs from the previous element's. Keys are
/// compared with [`PartialEq`], use an [`Option`] key where absent keys are required, two `None`s
/// are equal. An empty `seq` produces no partitions.
pub fn partition_by<S, K, F>(key: K, seq: S) -> PartitionedBy<S, K>
where
    S: Sequence,
    K: FnMut(&S::Item) -> F + Clone,
    F: PartialEq,
{
    PartitionedBy {
        key,
        seq,
    }
}

/// Consumes the next run of elements with equal keys from `cursor`.
///
/// The element that ends the run is pushed back onto `cursor`, so that it starts the next one.
/// Returns an empty [`Vec`] if `cursor` is exhausted.
pub fn consume_next_partition<C, K, F>(key: &mut K, cursor: &mut PushBack<C>) -> Vec<C::Item>
where
    C: Cursor,
    K: FnMut(&C::Item) -> F,
    F: PartialEq,
{
    let mut partition = Vec::new();
    let Some(head) = cursor.next_element() else {
        return partition;
    };

    let run = key(&head);
    partition.push(head);
    while let Some(item) = cursor.next_element() {
        if key(&item) != run {
            cursor.push_back(item);
            break;
        }
        partition.push(item);
    }
    partition
}

#[derive(Debug, Clone)]
pub struct PartitionedBy<S, K> {
    pub(crate) key: K,
    pub(crate) seq: S,
}

impl<S, K, F> Sequence for PartitionedBy<S, K>
where
    S: Sequence,
    K: FnMut(&S::Item) -> F + Clone,
    F: PartialEq,
{
    type Item = Vec<S::Item>;

    type Cursor = PartitionedByCursor<S::Cursor, K>;

    fn cursor(&self) -> Self::Cursor {
        PartitionedByCursor {
            key: self.key.clone(),
            cursor: PushBack::new(self.seq.cursor()),
        }
    }
}

pub struct PartitionedByCursor<C: Cursor, K> {
    pub(crate) key: K,
    pub(crate) cursor: PushBack<C>,
}

impl<C, K, F> Cursor for PartitionedByCursor<C, K>
where
    C: Cursor,
    K: FnMut(&C::Item) -> F,
    F: PartialEq,
{
    type Item = Vec<C::Item>;

    fn has_more(&mut self) -> bool {
        self.cursor.has_more()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if !self.cursor.has_more() {
            return Err(ExhaustedError);
        }
        Ok(consume_next_partition(&mut self.key, &mut self.cursor))
    }
}

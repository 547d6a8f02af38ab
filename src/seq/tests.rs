#![cfg(test)]

use std::rc::Rc;

use super::*;

#[test]
fn test_iterable_is_retraversable() {
    let seq = iterable(vec![1, 2, 3]);
    assert_eq!(seq.iter().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(
        seq.iter().collect::<Vec<_>>(),
        [1, 2, 3],
        "A second traversal should see the same elements."
    );
}

#[test]
fn test_cursors_are_independent() {
    let seq = as_iterable(vec!['a', 'b', 'c']);
    let mut first = seq.cursor();
    let mut second = seq.cursor();

    assert_eq!(first.take_next(), Ok('a'));
    assert_eq!(first.take_next(), Ok('b'));
    assert_eq!(
        second.take_next(),
        Ok('a'),
        "Advancing one cursor shouldn't move another."
    );
}

#[test]
fn test_take_next_without_has_more() {
    let mut cursor = iterable(0..3).cursor();
    assert_eq!(cursor.take_next(), Ok(0));
    assert_eq!(cursor.take_next(), Ok(1));
    assert_eq!(cursor.take_next(), Ok(2));
    assert_eq!(cursor.take_next(), Err(ExhaustedError));
}

#[test]
fn test_has_more_is_idempotent() {
    let mut cursor = iterable([7]).cursor();
    assert!(cursor.has_more());
    assert!(
        cursor.has_more(),
        "Calling has_more twice shouldn't consume an element."
    );
    assert_eq!(cursor.take_next(), Ok(7));
    assert!(!cursor.has_more());
    assert!(!cursor.has_more());
}

#[test]
fn test_remove_is_unsupported() {
    let mut cursor = as_cursor(vec![1]);
    assert_eq!(cursor.remove(), Err(UnsupportedOperationError));
    assert_eq!(
        cursor.take_next(),
        Ok(1),
        "A failed removal shouldn't affect the cursor."
    );
}

#[test]
fn test_empty() {
    let seq = empty::<u8>();
    assert!(!seq.cursor().has_more());
    assert_eq!(seq.cursor().take_next(), Err(ExhaustedError));
    assert_eq!(seq.iter().count(), 0);
}

#[test]
fn test_absent_sequence_is_empty() {
    let absent: Option<Iterable<Vec<i32>>> = None;
    assert!(!absent.cursor().has_more());
    assert_eq!(Sequence::iter(&absent).count(), 0);

    let present = Some(iterable(vec![1, 2]));
    assert_eq!(present.cursor().iter().collect::<Vec<_>>(), [1, 2]);
}

#[test]
fn test_shared_sequences() {
    let seq = Rc::new(as_iterable(vec![1, 2]));
    let alias = Rc::clone(&seq);
    assert_eq!(seq.iter().sum::<i32>(), alias.iter().sum::<i32>());
    assert_eq!((&*seq).iter().count(), 2);
}

#[test]
fn test_cursor_iter_hands_back_cursor() {
    let mut iter = as_cursor(vec![1, 2, 3]).iter();
    assert_eq!(iter.next(), Some(1));
    let mut cursor = iter.into_cursor();
    assert_eq!(
        cursor.take_next(),
        Ok(2),
        "The cursor should resume after the last yielded element."
    );
}

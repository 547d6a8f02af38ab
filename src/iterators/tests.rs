#![cfg(test)]

use super::*;
use crate::seq::{as_cursor, empty, Cursor, ExhaustedError, Sequence};

#[test]
fn test_first() {
    let mut cursor = as_cursor(vec![1, 2, 3]);
    assert_eq!(first(&mut cursor), Some(1));
    assert_eq!(
        first(&mut cursor),
        Some(2),
        "first should consume from the cursor it was given."
    );
    assert_eq!(first(empty::<i32>().cursor()), None);
}

#[test]
fn test_rest() {
    let cursor = rest(as_cursor(vec![1, 2, 3]));
    assert_eq!(to_list(cursor), [2, 3]);

    let mut cursor = rest(empty::<i32>().cursor());
    assert_eq!(cursor.take_next(), Err(ExhaustedError));
}

#[test]
fn test_last() {
    assert_eq!(last(as_cursor(vec![1, 2, 3])), Some(3));
    assert_eq!(last(as_cursor(Vec::<i32>::new())), None);
}

#[test]
fn test_to_list() {
    let mut cursor = as_cursor(vec!['a', 'b', 'c']);
    let _ = cursor.take_next();
    assert_eq!(to_list(cursor), ['b', 'c']);
}

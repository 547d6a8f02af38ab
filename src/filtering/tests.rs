#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::iterables::to_list;
use crate::seq::{empty, iterable, Cursor, Sequence};

fn even(x: &i32) -> bool {
    x % 2 == 0
}

#[test]
fn test_filter() {
    assert_eq!(to_list(filter(even, iterable(0..10))), [0, 2, 4, 6, 8]);
    assert_eq!(to_list(filter(even, empty::<i32>())).len(), 0);
    assert_eq!(
        to_list(filter(even, iterable([1, 3, 5]))).len(),
        0,
        "A filter that never holds should yield nothing."
    );
}

#[test]
fn test_filter_is_lazy() {
    let tested = Rc::new(Cell::new(0));
    let counter = Rc::clone(&tested);
    let seq = filter(
        move |x: &i32| {
            counter.set(counter.get() + 1);
            x % 2 == 0
        },
        iterable(0..),
    );

    let mut cursor = seq.cursor();
    assert_eq!(tested.get(), 0, "Nothing should be tested before traversal.");
    assert!(cursor.has_more());
    assert!(cursor.has_more());
    assert_eq!(tested.get(), 1, "has_more should only look ahead once.");
    assert_eq!(cursor.take_next(), Ok(0));
    assert_eq!(cursor.take_next(), Ok(2));
    assert_eq!(tested.get(), 3);
}

#[test]
fn test_by_memoizes_key() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut long = by(
        move |s: &String| {
            counter.set(counter.get() + 1);
            s.len()
        },
        |len: &usize| *len > 3,
    );

    assert!(long.test(&String::from("long")));
    assert!(long.test(&String::from("long")));
    assert!(!long.test(&String::from("no")));
    assert_eq!(
        calls.get(),
        2,
        "The key should be computed once per distinct value."
    );
}

#[test]
fn test_filter_by() {
    let words = iterable(vec!["a", "abc", "ab", "abcd"]);
    assert_eq!(
        to_list(filter_by(|s: &&str| s.len(), |len: &usize| len % 2 == 1, &words)),
        ["a", "abc"]
    );
}

#[test]
fn test_by_present() {
    let mut parses = by_present(|s: &&str| s.parse::<i32>().ok());
    assert!(parses.test(&"42"));
    assert!(!parses.test(&"forty-two"));
}

#[test]
fn test_present() {
    let mut present = present::<i32>();
    assert!(!present.test(&None), "Absent values should fail.");
    assert!(present.test(&Some(0)));
}

#[test]
fn test_zero() {
    assert!(zero::<i32>().test(&0));
    assert!(!zero::<i32>().test(&-1));
    assert!(zero::<f64>().test(&0.0));
}

#[test]
fn test_combinators() {
    let positive = |x: &i32| *x > 0;
    let small = |x: &i32| *x < 10;

    assert!(positive.and(small).test(&5));
    assert!(!positive.and(small).test(&15));
    assert!(positive.or(small).test(&-5));
    assert!(positive.negate().test(&-5));
    assert!(!not(positive).test(&5));

    assert!(all([positive, positive]).test(&1));
    assert!(all(Vec::<fn(&i32) -> bool>::new()).test(&1));
    assert!(!any(Vec::<fn(&i32) -> bool>::new()).test(&1));
    assert!(any([even as fn(&i32) -> bool, |x: &i32| *x > 100]).test(&101));
}

#[test]
#[should_panic(expected = "predicate failed")]
fn test_filter_propagates_predicate_panic() {
    let filtered = filter(|_: &i32| -> bool { panic!("predicate failed") }, iterable([1, 2]));
    filtered.cursor().has_more();
}

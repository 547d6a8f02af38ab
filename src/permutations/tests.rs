#![cfg(test)]

use super::*;
use crate::iterables::to_list;
use crate::seq::{Cursor, Sequence};

fn assert_permuted<T: Clone + PartialEq + std::fmt::Debug>(input: Vec<T>, expected: Vec<Vec<T>>) {
    assert_eq!(
        to_list(permutations(input.clone())),
        expected,
        "Unexpected permutations of {input:?}."
    );
}

#[test]
fn test_no_permutations() {
    assert_permuted(Vec::<i32>::new(), vec![]);

    let mut cursor = permutations(Vec::<i32>::new()).cursor();
    assert!(
        !cursor.has_more(),
        "An empty input should have no permutations, not a single empty one."
    );
}

#[test]
fn test_integer_permutations() {
    assert_permuted(vec![0], vec![vec![0]]);
    assert_permuted(vec![0, 1], vec![vec![0, 1], vec![1, 0]]);
    assert_permuted(
        vec![0, 1, 2],
        vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ],
    );
    assert_permuted(
        vec![0, 1, 2, 3],
        vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 3, 2],
            vec![0, 2, 1, 3],
            vec![0, 2, 3, 1],
            vec![0, 3, 1, 2],
            vec![0, 3, 2, 1],
            vec![1, 0, 2, 3],
            vec![1, 0, 3, 2],
            vec![1, 2, 0, 3],
            vec![1, 2, 3, 0],
            vec![1, 3, 0, 2],
            vec![1, 3, 2, 0],
            vec![2, 0, 1, 3],
            vec![2, 0, 3, 1],
            vec![2, 1, 0, 3],
            vec![2, 1, 3, 0],
            vec![2, 3, 0, 1],
            vec![2, 3, 1, 0],
            vec![3, 0, 1, 2],
            vec![3, 0, 2, 1],
            vec![3, 1, 0, 2],
            vec![3, 1, 2, 0],
            vec![3, 2, 0, 1],
            vec![3, 2, 1, 0],
        ],
    );
}

#[test]
fn test_string_permutations() {
    assert_permuted(vec!["a"], vec![vec!["a"]]);
    assert_permuted(
        vec!["c", "a", "b"],
        vec![
            vec!["c", "a", "b"],
            vec!["c", "b", "a"],
            vec!["a", "c", "b"],
            vec!["a", "b", "c"],
            vec!["b", "c", "a"],
            vec!["b", "a", "c"],
        ],
    );
}

#[test]
fn test_duplicates_are_kept() {
    let all = to_list(permutations(vec![1, 1]));
    assert_eq!(
        all,
        [vec![1, 1], vec![1, 1]],
        "Permuting positions should keep duplicate permutations."
    );
    assert_eq!(to_list(permutations(vec!['x', 'x', 'y'])).len(), 6);
}

#[test]
fn test_count() {
    for (n, count) in [(1, 1), (2, 2), (3, 6), (4, 24), (5, 120), (6, 720)] {
        assert_eq!(
            permutations((0..n).collect::<Vec<_>>()).iter().count(),
            count,
            "Expected {count} permutations of {n} elements."
        );
    }
}

#[test]
fn test_next_permutation() {
    let mut indexes = vec![0, 2, 1];
    next_permutation(&mut indexes);
    assert_eq!(indexes, [1, 0, 2]);

    let mut last = vec![2, 1, 0];
    next_permutation(&mut last);
    assert!(last.is_empty(), "The final permutation should leave the sentinel.");
}

#[test]
fn test_cursor_indexes() {
    let mut cursor = permutations(vec!['a', 'b']).cursor();
    assert_eq!(cursor.indexes(), [0, 1]);
    let _ = cursor.take_next();
    assert_eq!(cursor.indexes(), [1, 0]);
    let _ = cursor.take_next();
    assert!(cursor.indexes().is_empty());
    assert!(cursor.take_next().is_err());
}

#[test]
fn test_swap() {
    let mut empty: [i32; 0] = [];
    swap(&mut empty, 0, 0);

    let mut array = [0, 1, 2, 3];
    swap(&mut array, 0, 0);
    assert_eq!(array, [0, 1, 2, 3]);
    swap(&mut array, 0, 2);
    assert_eq!(array, [2, 1, 0, 3]);
    swap(&mut array, 1, 4);
    assert_eq!(array, [2, 1, 0, 3], "Out of bounds swaps should do nothing.");
}

#[test]
fn test_reverse() {
    let mut array = [0, 1, 2, 3, 4];
    reverse_from(&mut array, 0);
    assert_eq!(array, [4, 3, 2, 1, 0]);

    let mut array = [0, 1, 2, 3, 4];
    reverse_from(&mut array, 2);
    assert_eq!(array, [0, 1, 4, 3, 2]);

    let mut array = [0, 1, 2, 3, 4];
    reverse(&mut array, 1, 2);
    assert_eq!(array, [0, 2, 1, 3, 4]);

    reverse(&mut array, 3, 100);
    assert_eq!(array, [0, 2, 1, 4, 3]);
    reverse_from(&mut array, 9);
    assert_eq!(array, [0, 2, 1, 4, 3], "Reversing past the end should do nothing.");
}

#[test]
fn test_find() {
    let array = [3, 1, 4, 1, 5];
    assert_eq!(find_first(&array, |_, x, _| *x == 1), Some((1, &1)));
    assert_eq!(find_last(&array, |_, x, _| *x == 1), Some((3, &1)));
    assert_eq!(find_first(&array, |_, x, _| *x > 10), None);
    assert_eq!(
        find_last(&array, |i, x, all| all.get(i + 1).is_some_and(|next| x < next)),
        Some((3, &1)),
        "The predicate should be able to look at neighbours."
    );
    assert_eq!(range(3), [0, 1, 2]);
}

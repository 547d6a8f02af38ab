use std::rc::Rc;

use super::{find_last, range, reverse_from, swap};
use crate::seq::{Cursor, ExhaustedError, Sequence};

/// Every permutation of `input`, as a lazy sequence of [`Vec`]s.
///
/// An input of `n` elements yields `n!` permutations, except for an empty input, which yields
/// none at all.
///
/// # Examples
/// ```
/// # use functional_core::{permutations::permutations, seq::Sequence};
/// let all: Vec<Vec<char>> = permutations(vec!['a', 'b', 'c']).iter().collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], ['a', 'b', 'c']);
/// assert_eq!(all[5], ['c', 'b', 'a']);
/// ```
pub fn permutations<T: Clone>(input: impl Into<Rc<[T]>>) -> Permutations<T> {
    Permutations {
        input: input.into(),
    }
}

/// Advances `indexes` to the next permutation in lexicographic order.
///
/// Once `indexes` is strictly descending there is no next permutation and it is cleared instead,
/// leaving the empty array as a marker of exhaustion.
pub fn next_permutation(indexes: &mut Vec<usize>) {
    // The rightmost ascent marks the shortest suffix that can still be rearranged upwards.
    let ascent = find_last(indexes.as_slice(), |i, index, all| {
        all.get(i + 1).is_some_and(|next| index < next)
    })
    .map(|(i, index)| (i, *index));

    let Some((i, pivot)) = ascent else {
        indexes.clear();
        return;
    };

    let Some((j, _)) = find_last(indexes.as_slice(), |j, index, _| j > i && pivot < *index) else {
        indexes.clear();
        return;
    };

    swap(indexes.as_mut_slice(), i, j);
    reverse_from(indexes.as_mut_slice(), i + 1);
}

pub struct Permutations<T> {
    pub(crate) input: Rc<[T]>,
}

impl<T> Clone for Permutations<T> {
    fn clone(&self) -> Self {
        Permutations {
            input: Rc::clone(&self.input),
        }
    }
}

impl<T: Clone> Sequence for Permutations<T> {
    type Item = Vec<T>;

    type Cursor = PermutationsCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        PermutationsCursor {
            input: Rc::clone(&self.input),
            indexes: range(self.input.len()),
        }
    }
}

pub struct PermutationsCursor<T> {
    pub(crate) input: Rc<[T]>,
    pub(crate) indexes: Vec<usize>,
}

impl<T: Clone> PermutationsCursor<T> {
    /// The index array of the permutation that will be yielded next, empty once exhausted.
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }
}

impl<T: Clone> Cursor for PermutationsCursor<T> {
    type Item = Vec<T>;

    fn has_more(&mut self) -> bool {
        !self.indexes.is_empty()
    }

    fn take_next(&mut self) -> Result<Self::Item, ExhaustedError> {
        if self.indexes.is_empty() {
            return Err(ExhaustedError);
        }
        let permutation = self
            .indexes
            .iter()
            .filter_map(|&index| self.input.get(index).cloned())
            .collect();
        next_permutation(&mut self.indexes);
        Ok(permutation)
    }
}

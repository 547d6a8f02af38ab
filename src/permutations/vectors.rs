//! In-place helpers over slices, as used by the next-permutation step.

/// Returns the identity index array `[0, 1, ..., n - 1]`.
pub fn range(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Swaps the elements at `i` and `j`. Does nothing if either is out of bounds.
pub fn swap<T>(array: &mut [T], i: usize, j: usize) {
    if i < array.len() && j < array.len() {
        array.swap(i, j);
    }
}

/// Reverses `count` elements starting at `from`, clamped to the end of the slice.
pub fn reverse<T>(array: &mut [T], from: usize, count: usize) {
    let end = from.saturating_add(count).min(array.len());
    if let Some(window) = array.get_mut(from..end) {
        window.reverse();
    }
}

/// Reverses every element from `from` to the end of the slice.
pub fn reverse_from<T>(array: &mut [T], from: usize) {
    let len = array.len();
    reverse(array, from, len);
}

/// Finds the first element that satisfies `predicate`, returning it with its index.
///
/// The predicate is given the index, the element and the whole slice, so that it can look at
/// neighbouring elements.
pub fn find_first<T, P>(array: &[T], mut predicate: P) -> Option<(usize, &T)>
where
    P: FnMut(usize, &T, &[T]) -> bool,
{
    array
        .iter()
        .enumerate()
        .find(|(index, element)| predicate(*index, element, array))
}

/// Finds the last element that satisfies `predicate`, returning it with its index.
pub fn find_last<T, P>(array: &[T], mut predicate: P) -> Option<(usize, &T)>
where
    P: FnMut(usize, &T, &[T]) -> bool,
{
    array
        .iter()
        .enumerate()
        .rfind(|(index, element)| predicate(*index, element, array))
}

use crate::seq::Cursor;

/// Takes the next element of the cursor, or [`None`] if it is exhausted.
pub fn first<C: Cursor>(mut cursor: C) -> Option<C::Item> {
    cursor.next_element()
}

/// Skips a single element, returning the cursor positioned over the remainder.
pub fn rest<C: Cursor>(mut cursor: C) -> C {
    if cursor.has_more() {
        let _ = cursor.take_next();
    }
    cursor
}

/// Exhausts the cursor, returning the final element seen.
pub fn last<C: Cursor>(cursor: C) -> Option<C::Item> {
    cursor.iter().last()
}

/// Collects every remaining element.
pub fn to_list<C: Cursor>(cursor: C) -> Vec<C::Item> {
    cursor.iter().collect()
}

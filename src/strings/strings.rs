use regex::Regex;

use crate::seq::{iterable, Iterable};

/// Holds for strings made up of nothing but whitespace, the empty string included.
pub fn is_blank(string: &str) -> bool {
    string.trim().is_empty()
}

pub fn is_not_blank(string: &str) -> bool {
    !is_blank(string)
}

/// Holds for non-empty strings made up of nothing but ASCII digits.
pub fn is_numeric(string: &str) -> bool {
    !string.is_empty() && string.bytes().all(|b| b.is_ascii_digit())
}

/// The characters of `string`, as a sequence. Blank strings produce an empty sequence.
pub fn sequence(string: &str) -> Iterable<Vec<char>> {
    if is_blank(string) {
        iterable(Vec::new())
    } else {
        iterable(string.chars().collect())
    }
}

/// Splits `string` around matches of the regular expression `pattern`, dropping any trailing empty
/// parts.
///
/// # Errors
/// Returns a [`regex::Error`] if `pattern` doesn't compile.
pub fn split(string: &str, pattern: &str) -> Result<Vec<String>, regex::Error> {
    split_limit(string, pattern, 0)
}

/// Splits `string` around matches of `pattern`, with a limit on the number of parts.
///
/// - For `limit > 0`, at most `limit` parts are produced, the last holding the unsplit remainder.
/// - For `limit == 0`, every part is produced except trailing empty parts.
/// - For `limit < 0`, every part is produced.
///
/// A string with no match comes back whole, so `split("", ",")` is `[""]`. A zero-width match at
/// the very start produces no leading empty part, so `split("abc", "")` is `["a", "b", "c"]`.
///
/// # Errors
/// Returns a [`regex::Error`] if `pattern` doesn't compile.
pub fn split_limit(string: &str, pattern: &str, limit: isize) -> Result<Vec<String>, regex::Error> {
    let regex = Regex::new(pattern)?;
    let max_parts = usize::try_from(limit).ok().filter(|&limit| limit > 0);
    let mut parts = Vec::new();
    let mut start = 0;
    for found in regex.find_iter(string) {
        if max_parts.is_some_and(|max| parts.len() + 1 >= max) {
            break;
        }
        if found.end() == 0 {
            continue;
        }
        parts.push(string[start..found.start()].to_owned());
        start = found.end();
    }
    if parts.is_empty() {
        return Ok(vec![string.to_owned()]);
    }
    parts.push(string[start..].to_owned());
    if limit == 0 {
        while parts.last().is_some_and(String::is_empty) {
            parts.pop();
        }
    }
    Ok(parts)
}

/// Splits `string` into alternating runs of ASCII digits and everything else.
///
/// # Examples
/// ```
/// # use functional_core::strings::split_into_numeric_and_non_numeric_parts;
/// assert_eq!(split_into_numeric_and_non_numeric_parts("img10.png"), ["img", "10", ".png"]);
/// ```
pub fn split_into_numeric_and_non_numeric_parts(string: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut numeric = None;
    for (index, c) in string.char_indices() {
        let digit = c.is_ascii_digit();
        if numeric.is_some_and(|numeric| numeric != digit) {
            parts.push(&string[start..index]);
            start = index;
        }
        numeric = Some(digit);
    }
    if start < string.len() {
        parts.push(&string[start..]);
    }
    parts
}

pub fn includes(string: &str, substring: &str) -> bool {
    string.contains(substring)
}

/// Holds if `string` contains any of `substrings`.
pub fn includes_any<S: AsRef<str>>(string: &str, substrings: impl IntoIterator<Item = S>) -> bool {
    substrings.into_iter().any(|substring| string.contains(substring.as_ref()))
}

/// Counts the non-overlapping occurrences of `substring`.
///
/// The empty string is found between every pair of characters and at both ends, for a total of
/// one more than the number of characters.
pub fn count_inclusions(string: &str, substring: &str) -> usize {
    if substring.is_empty() {
        string.chars().count() + 1
    } else {
        string.matches(substring).count()
    }
}

/// Pads `string` on the right with copies of `fill` until it is `width` characters wide. Strings
/// that are already wide enough are returned unchanged.
pub fn left_justify(string: &str, width: usize, fill: &str) -> String {
    let padding = width.saturating_sub(string.chars().count());
    format!("{string}{}", fill.repeat(padding))
}

/// Pads `string` on the left with copies of `fill`, see [`left_justify`].
pub fn right_justify(string: &str, width: usize, fill: &str) -> String {
    let padding = width.saturating_sub(string.chars().count());
    format!("{}{string}", fill.repeat(padding))
}

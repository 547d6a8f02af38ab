use std::fmt::Display;

use crate::iterables::{interleave, map, Mapped};
use crate::seq::Sequence;

/// Joins the [`Display`] forms of every element of `seq`, with `separator` between each pair.
///
/// # Examples
/// ```
/// # use functional_core::{seq::iterable, strings::join};
/// assert_eq!(join(", ", iterable([1, 2, 3])), "1, 2, 3");
/// assert_eq!(join(", ", iterable(Vec::<i32>::new())), "");
/// ```
pub fn join<S>(separator: &str, seq: S) -> String
where
    S: Sequence,
    S::Item: Display,
{
    let mut result = String::new();
    let mut delimiter = "";
    for item in seq.iter() {
        result.push_str(delimiter);
        result.push_str(&item.to_string());
        delimiter = separator;
    }
    result
}

fn display<T: Display>(item: T) -> String {
    item.to_string()
}

/// Lazily converts every element to a [`String`] with its [`Display`] implementation.
pub fn map_string<S>(seq: S) -> Mapped<S, fn(S::Item) -> String>
where
    S: Sequence,
    S::Item: Display,
{
    map(display::<S::Item> as fn(S::Item) -> String, seq)
}

/// Substitutes `args`, in order, for each `{}` placeholder of `template`. Placeholders without a
/// matching argument are left in place and surplus arguments are ignored. `{{` and `}}` escape
/// literal braces.
///
/// # Examples
/// ```
/// # use functional_core::strings::format_with;
/// assert_eq!(format_with("{} = {}!", &[&"x", &0]), "x = 0!");
/// ```
pub fn format_with(template: &str, args: &[&dyn Display]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(index) = rest.find(['{', '}']) {
        result.push_str(&rest[..index]);
        let tail = &rest[index..];
        if tail.starts_with("{{") {
            result.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            result.push('}');
            rest = &tail[2..];
        } else if tail.starts_with("{}") {
            match args.next() {
                Some(arg) => result.push_str(&arg.to_string()),
                None => result.push_str("{}"),
            }
            rest = &tail[2..];
        } else {
            result.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }
    result.push_str(rest);
    result
}

/// Formats every element of `seq` into `template`. Eager.
pub fn map_format<S>(template: &str, seq: S) -> Vec<String>
where
    S: Sequence,
    S::Item: Display,
{
    seq.iter().map(|item| format_with(template, &[&item])).collect()
}

/// Formats the elements of every one of `seqs` together into `template`, taking one element from
/// each for every result, until the first of them runs out. Eager.
pub fn map_format_all<S>(template: &str, seqs: impl IntoIterator<Item = S>) -> Vec<String>
where
    S: Sequence,
    S::Item: Display,
{
    interleave(seqs)
        .iter()
        .map(|items| {
            let args: Vec<&dyn Display> = items.iter().map(|item| item as &dyn Display).collect();
            format_with(template, &args)
        })
        .collect()
}

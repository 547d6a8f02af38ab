use std::any::Any;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use super::{LookupError, NoSuchKeyError, OddElementsError};
use crate::classes::cast;
use crate::seq::Sequence;

pub const fn entry<K, V>(key: K, value: V) -> (K, V) {
    (key, value)
}

/// Pairs up `keys` and `values` until either runs out. Later duplicate keys overwrite the values of
/// earlier ones, but keep their position.
pub fn zip<K, V>(keys: impl Sequence<Item = K>, values: impl Sequence<Item = V>) -> IndexMap<K, V>
where
    K: Hash + Eq,
{
    keys.iter().zip(values.iter()).collect()
}

/// Returns a copy of `map` with every entry of `entries` inserted.
pub fn into<K, V>(map: &IndexMap<K, V>, entries: impl Sequence<Item = (K, V)>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut result = map.clone();
    into_mut(&mut result, entries);
    result
}

/// Inserts every entry of `entries` into `map`.
pub fn into_mut<K, V>(
    map: &mut IndexMap<K, V>,
    entries: impl Sequence<Item = (K, V)>,
) -> &mut IndexMap<K, V>
where
    K: Hash + Eq,
{
    map.extend(entries.iter());
    map
}

/// Interprets a flat list as alternating keys and values.
///
/// # Errors
/// Returns [`OddElementsError`] if `elements` doesn't have an even length.
pub fn as_map<T: Hash + Eq>(elements: Vec<T>) -> Result<IndexMap<T, T>, OddElementsError> {
    if elements.len() % 2 == 1 {
        return Err(OddElementsError {
            len: elements.len(),
        });
    }

    let mut map = IndexMap::with_capacity(elements.len() / 2);
    let mut elements = elements.into_iter();
    while let (Some(key), Some(value)) = (elements.next(), elements.next()) {
        map.insert(key, value);
    }
    Ok(map)
}

/// Checks that `map` contains every one of `keys`.
pub fn contains_every<K: Hash + Eq, V>(map: &IndexMap<K, V>, keys: &[K]) -> bool {
    keys.iter().all(|key| map.contains_key(key))
}

/// Returns a copy of `map` without any of `keys`, preserving the order of what remains.
pub fn dissoc<K, V>(map: &IndexMap<K, V>, keys: &[K]) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    map.iter()
        .filter(|(key, _)| !keys.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Looks up `key`, falling back to `default` if it is missing.
///
/// # Errors
/// Returns [`NoSuchKeyError`] if `key` is missing and no default was provided.
pub fn get<K, V>(map: &IndexMap<K, V>, key: &K, default: Option<V>) -> Result<V, NoSuchKeyError>
where
    K: Hash + Eq + Debug,
    V: Clone,
{
    match map.get(key) {
        Some(value) => Ok(value.clone()),
        None => default.ok_or_else(|| NoSuchKeyError {
            key: format!("{key:?}"),
        }),
    }
}

/// Looks up `key` in a map of dynamically typed values, and casts the value found to `V`.
///
/// # Errors
/// Returns [`LookupError::NoSuchKey`] if `key` is missing and no default was provided and
/// [`LookupError::ClassCast`] if the value found (or the default) isn't a `V`.
pub fn get_as<K, V>(
    map: &IndexMap<K, Box<dyn Any>>,
    key: &K,
    default: Option<&dyn Any>,
) -> Result<V, LookupError>
where
    K: Hash + Eq + Debug,
    V: Any + Clone,
{
    let value = match (map.get(key), default) {
        (Some(value), _) => &**value,
        (None, Some(default)) => default,
        (None, None) => {
            return Err(NoSuchKeyError {
                key: format!("{key:?}"),
            }
            .into());
        },
    };
    Ok(cast(value)?)
}

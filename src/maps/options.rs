use std::any::Any;

use indexmap::IndexMap;

use super::{LookupError, NoSuchKeyError, OddElementsError, OptionKeyError, OptionsError};
use crate::classes::cast;

/// A parsed option list: string keys, mapped to values of any type.
///
/// # Examples
/// ```
/// # use functional_core::maps::Options;
/// let options = Options::parse(&[&"append?", &true]).unwrap();
/// assert_eq!(options.get_or("append?", false), Ok(true));
/// assert_eq!(options.get_or("flush?", true), Ok(true));
/// ```
#[derive(Default)]
pub struct Options<'a> {
    entries: IndexMap<String, &'a dyn Any>,
}

impl<'a> Options<'a> {
    /// Parses a flat list alternating keys and values. Keys may be `&str` or [`String`].
    ///
    /// # Errors
    /// Returns [`OptionsError::OddElements`] for a list of odd length and [`OptionsError::Key`]
    /// if a key isn't a string. Later duplicates of a key replace earlier values.
    pub fn parse(elements: &[&'a dyn Any]) -> Result<Options<'a>, OptionsError> {
        if elements.len() % 2 == 1 {
            return Err(OddElementsError {
                len: elements.len(),
            }
            .into());
        }

        let mut entries = IndexMap::new();
        for (index, pair) in elements.chunks_exact(2).enumerate() {
            let [key, value] = pair else {
                continue;
            };
            let key = if let Some(key) = key.downcast_ref::<&str>() {
                (*key).to_owned()
            } else if let Some(key) = key.downcast_ref::<String>() {
                key.clone()
            } else {
                return Err(OptionKeyError {
                    index: index * 2,
                }
                .into());
            };
            entries.insert(key, *value);
        }
        Ok(Options {
            entries,
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value of `key` as a `V`.
    ///
    /// # Errors
    /// Returns a [`LookupError`] if `key` is missing or holds some other type.
    pub fn get<V: Any + Clone>(&self, key: &str) -> Result<V, LookupError> {
        let value = self.entries.get(key).ok_or_else(|| NoSuchKeyError {
            key: key.to_owned(),
        })?;
        Ok(cast(*value)?)
    }

    /// Returns the value of `key` as a `V`, or `default` if it is missing.
    ///
    /// # Errors
    /// Returns a [`LookupError`] if `key` holds some other type.
    pub fn get_or<V: Any + Clone>(&self, key: &str, default: V) -> Result<V, LookupError> {
        match self.entries.get(key) {
            Some(value) => Ok(cast(*value)?),
            None => Ok(default),
        }
    }
}

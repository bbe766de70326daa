//! Eager materializers. Both drain a fresh cursor to the end.

use std::{
    collections::{HashMap, hash_map::Entry},
    hash::Hash,
};

use crate::{Error, Result, sequence::Sequence};

pub(crate) fn to_list<S>(source: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
{
    source.values().collect()
}

pub(crate) fn to_dictionary<S, F, K>(source: &S, mut key: F) -> Result<HashMap<K, S::Item>>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> K,
    K: Eq + Hash,
{
    let mut dictionary = HashMap::new();

    for (index, item) in source.values().enumerate() {
        match dictionary.entry(key(&item)) {
            Entry::Occupied(_) => {
                tracing::debug!(index, "duplicate key while building dictionary");
                return Err(Error::DuplicateKey { index });
            }
            Entry::Vacant(entry) => {
                entry.insert(item);
            }
        }
    }

    Ok(dictionary)
}

//! Frequency tables with a deterministic order.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// Keys with their occurrence counts, ordered by descending count.
/// Keys with equal counts keep the order in which they were first seen,
/// so the order of a table is reproducible across runs.
///
/// Serializes as a sequence of `[key, count]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, u64)>,
}

impl<K> FrequencyTable<K> {
    pub fn new() -> FrequencyTable<K> {
        FrequencyTable {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(K, u64)] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, u64)> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<(K, u64)> {
        self.entries
    }

    /// Count for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|&(_, count)| count)
    }

    /// Rewrite every key while keeping counts and order.
    pub fn map_keys<L, F>(self, mut f: F) -> FrequencyTable<L>
    where
        F: FnMut(K) -> L,
    {
        FrequencyTable {
            entries: self
                .entries
                .into_iter()
                .map(|(k, count)| (f(k), count))
                .collect(),
        }
    }

    /// Entries must already be in table order (count descending,
    /// first-seen on ties).
    pub(crate) fn from_entries(entries: Vec<(K, u64)>) -> FrequencyTable<K> {
        FrequencyTable { entries }
    }
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates occurrences and remembers first-seen order, so that
/// [FrequencyCounter::into_table] can break count ties deterministically.
pub struct FrequencyCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u64)>,
}

impl<K> FrequencyCounter<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> FrequencyCounter<K> {
        FrequencyCounter {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn into_table(self) -> FrequencyTable<K> {
        let mut entries = self.entries;
        entries.sort_by_key(|&(_, count)| Reverse(count));
        FrequencyTable { entries }
    }
}

impl<K> Default for FrequencyCounter<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

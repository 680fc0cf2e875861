use std::cmp::Ordering;

use super::{Entry, Lookup};
use crate::sort_dedup::sort_dedup_by;

/// Sorted, deduplicated entries queried by binary search.
///
/// Invariant: `entries[i].key < entries[i + 1].key` under the comparator the
/// table was built with.
#[derive(Debug, Clone)]
pub struct SparseTable<K, V> {
    entries: Box<[Entry<K, V>]>,
    default_value: V,
}

impl<K: Clone, V: Clone> SparseTable<K, V> {
    /// Build with a custom key comparator.
    ///
    /// Use this for keys whose order depends on outside data, such as slot
    /// indices into a string block compared by the strings they point at.
    ///
    /// # Panics
    /// Panics if `keys` and `values` differ in length.
    pub fn new_by<F>(keys: &[K], values: &[V], default_value: V, mut cmp: F) -> Self
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        assert_eq!(
            keys.len(),
            values.len(),
            "SparseTable: {} keys but {} values",
            keys.len(),
            values.len()
        );

        let mut entries: Vec<_> = keys
            .iter()
            .zip(values)
            .map(|(k, v)| Entry::new(k.clone(), v.clone()))
            .collect();
        let count = sort_dedup_by(&mut entries, |a, b| cmp(&a.key, &b.key));
        entries.truncate(count);

        Self {
            entries: entries.into_boxed_slice(),
            default_value,
        }
    }
}

impl<K: Ord + Clone, V: Clone> SparseTable<K, V> {
    /// Build from parallel key/value slices; the first entry of each key wins.
    pub fn new(keys: &[K], values: &[V], default_value: V) -> Self {
        Self::new_by(keys, values, default_value, K::cmp)
    }
}

impl<K, V> SparseTable<K, V> {
    /// Binary search with a probe returning how an entry's key orders
    /// relative to the target (as in `slice::binary_search_by`).
    pub fn find_by<F>(&self, mut probe: F) -> Option<&Entry<K, V>>
    where
        F: FnMut(&K) -> Ordering,
    {
        self.entries
            .binary_search_by(|entry| probe(&entry.key))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Check the strict ordering invariant under `cmp`.
    pub fn validate_map_by<F>(&self, mut cmp: F) -> bool
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        self.entries
            .windows(2)
            .all(|w| cmp(&w[0].key, &w[1].key) == Ordering::Less)
    }

    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }
}

impl<K: Ord, V> SparseTable<K, V> {
    pub fn contains(&self, key: &K) -> bool {
        self.find_by(|k| k.cmp(key)).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_by(|k| k.cmp(key)).map(|e| &e.value)
    }

    pub fn get_or<'a>(&'a self, key: &K, fallback: &'a V) -> &'a V {
        self.get(key).unwrap_or(fallback)
    }

    /// Value for `key`, or the table's default value.
    pub fn get_or_default(&self, key: &K) -> &V {
        self.get(key).unwrap_or(&self.default_value)
    }

    /// `true` when keys are strictly increasing.
    pub fn validate_map(&self) -> bool {
        self.validate_map_by(K::cmp)
    }
}

impl<K: Ord, V> Lookup<K, V> for SparseTable<K, V> {
    fn contains(&self, key: K) -> bool {
        SparseTable::contains(self, &key)
    }

    fn get(&self, key: K) -> Option<&V> {
        SparseTable::get(self, &key)
    }
}

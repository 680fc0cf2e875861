//! Read-only lookup tables.
//!
//! Two representations with identical observable behavior:
//! - **Dense** (`DenseTable`): array indexed by `key - min`, O(1) lookup, O(range) memory
//! - **Sparse** (`SparseTable`): sorted, deduplicated entries, O(log n) lookup, O(n) memory
//!
//! `Table` picks one of them per instance from the spread of the keys.
//! Duplicate keys resolve to the first occurrence in every representation.

mod dense;
mod entry;
mod key;
mod select;
mod sparse;

#[cfg(test)]
mod dense_tests;
#[cfg(test)]
mod select_tests;

pub use dense::DenseTable;
pub use entry::Entry;
pub use key::{IndexKey, key_bounds};
pub use select::{Representation, SPARSE_SLACK, Table, TablePolicy, select_representation};
pub use sparse::SparseTable;

/// Common query surface of all table representations.
pub trait Lookup<K, V> {
    fn contains(&self, key: K) -> bool;
    fn get(&self, key: K) -> Option<&V>;

    /// Value for `key`, or `fallback` when absent.
    fn get_or<'a>(&'a self, key: K, fallback: &'a V) -> &'a V {
        self.get(key).unwrap_or(fallback)
    }
}

impl<K, V, T: Lookup<K, V> + ?Sized> Lookup<K, V> for &T {
    fn contains(&self, key: K) -> bool {
        (*self).contains(key)
    }
    fn get(&self, key: K) -> Option<&V> {
        (*self).get(key)
    }
}

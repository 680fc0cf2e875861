use serde::{Deserialize, Serialize};

use super::{DenseTable, IndexKey, Lookup, SparseTable, key_bounds};

/// Extra key spread tolerated before the dense representation is abandoned.
pub const SPARSE_SLACK: i128 = 256;

/// Which representation a [`Table`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    Dense,
    Sparse,
}

/// How a [`Table`] chooses its representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TablePolicy {
    /// Decide from the key spread (see [`select_representation`]).
    #[default]
    Auto,
    /// Always dense. The table allocates one slot per key in `[min, max]`.
    Dense,
    /// Always sparse.
    Sparse,
}

/// Sparse when `max - min > 2 * count + 256`, dense otherwise.
pub fn select_representation(min: i128, max: i128, count: usize) -> Representation {
    if max - min > 2 * count as i128 + SPARSE_SLACK {
        Representation::Sparse
    } else {
        Representation::Dense
    }
}

impl TablePolicy {
    pub fn resolve<K: IndexKey>(self, keys: &[K]) -> Representation {
        match self {
            TablePolicy::Dense => Representation::Dense,
            TablePolicy::Sparse => Representation::Sparse,
            TablePolicy::Auto => key_bounds(keys).map_or(Representation::Dense, |(min, max)| {
                select_representation(min, max, keys.len())
            }),
        }
    }
}

/// Lookup table with a representation chosen at construction.
#[derive(Debug, Clone)]
pub enum Table<K, V> {
    Dense(DenseTable<K, V>),
    Sparse(SparseTable<K, V>),
}

impl<K: IndexKey, V: Clone> Table<K, V> {
    /// Build with [`TablePolicy::Auto`].
    pub fn new(keys: &[K], values: &[V], default_value: V) -> Self {
        Self::with_policy(keys, values, default_value, TablePolicy::Auto)
    }

    pub fn with_policy(keys: &[K], values: &[V], default_value: V, policy: TablePolicy) -> Self {
        let representation = policy.resolve(keys);
        tracing::debug!(
            ?representation,
            ?policy,
            entries = keys.len(),
            "building lookup table"
        );

        match representation {
            Representation::Dense => Table::Dense(DenseTable::new(keys, values, default_value)),
            Representation::Sparse => Table::Sparse(SparseTable::new(keys, values, default_value)),
        }
    }
}

impl<K: IndexKey, V> Table<K, V> {
    pub fn representation(&self) -> Representation {
        match self {
            Table::Dense(_) => Representation::Dense,
            Table::Sparse(_) => Representation::Sparse,
        }
    }

    pub fn contains(&self, key: K) -> bool {
        match self {
            Table::Dense(t) => t.contains(key),
            Table::Sparse(t) => t.contains(&key),
        }
    }

    pub fn get(&self, key: K) -> Option<&V> {
        match self {
            Table::Dense(t) => t.get(key),
            Table::Sparse(t) => t.get(&key),
        }
    }

    pub fn get_or<'a>(&'a self, key: K, fallback: &'a V) -> &'a V {
        self.get(key).unwrap_or(fallback)
    }

    pub fn get_or_default(&self, key: K) -> &V {
        match self {
            Table::Dense(t) => t.get_or_default(key),
            Table::Sparse(t) => t.get_or_default(&key),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        match self {
            Table::Dense(t) => t.len(),
            Table::Sparse(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strict key ordering holds. Dense tables are ordered by construction.
    pub fn validate_map(&self) -> bool {
        match self {
            Table::Dense(_) => true,
            Table::Sparse(t) => t.validate_map(),
        }
    }
}

impl<K: IndexKey, V> Lookup<K, V> for Table<K, V> {
    fn contains(&self, key: K) -> bool {
        Table::contains(self, key)
    }

    fn get(&self, key: K) -> Option<&V> {
        Table::get(self, key)
    }
}

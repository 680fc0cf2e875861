use std::marker::PhantomData;

use super::{IndexKey, Lookup, key_bounds};

/// Array-indexed table covering every key in `[min, max]`.
///
/// Each slot holds either a value written at construction or the default
/// value together with a cleared `present` flag.
#[derive(Debug, Clone)]
pub struct DenseTable<K, V> {
    /// Ordinal of the smallest key; slot `i` holds key `min + i`.
    min: i128,
    values: Box<[V]>,
    present: Box<[bool]>,
    default_value: V,
    _key: PhantomData<K>,
}

impl<K: IndexKey, V: Clone> DenseTable<K, V> {
    /// Build from parallel key/value slices.
    ///
    /// The first value written to a slot wins; later entries with the same key
    /// are ignored.
    ///
    /// # Panics
    /// Panics if `keys` and `values` differ in length, or if the key range does
    /// not fit in memory.
    pub fn new(keys: &[K], values: &[V], default_value: V) -> Self {
        assert_eq!(
            keys.len(),
            values.len(),
            "DenseTable: {} keys but {} values",
            keys.len(),
            values.len()
        );

        let (min, slot_count) = match key_bounds(keys) {
            Some((min, max)) => {
                let span = usize::try_from(max - min + 1)
                    .unwrap_or_else(|_| panic!("DenseTable: key range {min}..={max} too large"));
                (min, span)
            }
            None => (0, 0),
        };

        let mut slots = vec![default_value.clone(); slot_count];
        let mut present = vec![false; slot_count];
        for (key, value) in keys.iter().zip(values) {
            let slot = (key.ordinal() - min) as usize;
            if !present[slot] {
                slots[slot] = value.clone();
                present[slot] = true;
            }
        }

        Self {
            min,
            values: slots.into_boxed_slice(),
            present: present.into_boxed_slice(),
            default_value,
            _key: PhantomData,
        }
    }
}

impl<K: IndexKey, V> DenseTable<K, V> {
    #[inline]
    fn slot(&self, key: K) -> Option<usize> {
        let offset = key.ordinal() - self.min;
        if offset < 0 || offset >= self.values.len() as i128 {
            return None;
        }
        Some(offset as usize)
    }

    pub fn contains(&self, key: K) -> bool {
        self.slot(key).is_some_and(|slot| self.present[slot])
    }

    pub fn get(&self, key: K) -> Option<&V> {
        let slot = self.slot(key)?;
        self.present[slot].then(|| &self.values[slot])
    }

    pub fn get_or<'a>(&'a self, key: K, fallback: &'a V) -> &'a V {
        self.get(key).unwrap_or(fallback)
    }

    /// Value for `key`, or the table's default value.
    pub fn get_or_default(&self, key: K) -> &V {
        self.get(key).unwrap_or(&self.default_value)
    }

    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    /// Number of keys with a value.
    pub fn len(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|&p| p)
    }

    /// Number of slots (`max - min + 1`, or 0 when built from no keys).
    pub fn slot_count(&self) -> usize {
        self.values.len()
    }

    /// Smallest and largest key covered by the table.
    pub fn key_range(&self) -> Option<(K, K)> {
        let last = self.values.len().checked_sub(1)?;
        let min = K::from_ordinal(self.min)?;
        let max = K::from_ordinal(self.min + last as i128)?;
        Some((min, max))
    }

    /// Present entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.values
            .iter()
            .zip(self.present.iter())
            .enumerate()
            .filter(|(_, (_, present))| **present)
            .filter_map(|(i, (value, _))| K::from_ordinal(self.min + i as i128).map(|k| (k, value)))
    }
}

impl<K: IndexKey, V> Lookup<K, V> for DenseTable<K, V> {
    fn contains(&self, key: K) -> bool {
        DenseTable::contains(self, key)
    }

    fn get(&self, key: K) -> Option<&V> {
        DenseTable::get(self, key)
    }
}

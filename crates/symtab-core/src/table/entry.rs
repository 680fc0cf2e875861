/// A key/value pair stored in a [`SparseTable`](super::SparseTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

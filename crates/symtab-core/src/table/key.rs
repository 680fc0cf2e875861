//! Integer keys for array-indexed lookup.

use std::fmt::Debug;

/// A key that maps onto a position in an integer range.
///
/// Ordinals are `i128` so that `max - min` never overflows for any primitive
/// integer type up to 64 bits.
pub trait IndexKey: Copy + Ord + Debug {
    const ZERO: Self;

    fn ordinal(self) -> i128;

    /// Inverse of [`IndexKey::ordinal`]. `None` when out of range for `Self`.
    fn from_ordinal(ordinal: i128) -> Option<Self>;
}

macro_rules! impl_index_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IndexKey for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn ordinal(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_ordinal(ordinal: i128) -> Option<Self> {
                    <$ty>::try_from(ordinal).ok()
                }
            }
        )*
    };
}

impl_index_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Smallest and largest ordinal among `keys`, or `None` when empty.
pub fn key_bounds<K: IndexKey>(keys: &[K]) -> Option<(i128, i128)> {
    let min = keys.iter().min()?.ordinal();
    let max = keys.iter().max()?.ordinal();
    Some((min, max))
}

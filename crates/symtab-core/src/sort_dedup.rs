//! Stable merge sort that drops duplicate keys while merging.
//!
//! For every group of equal elements only the first one (in input order)
//! survives. The surviving elements are moved to the front of the slice and
//! their count is returned; whatever is left past that count is unspecified.

use std::cmp::Ordering;

/// Sort and deduplicate `values` in place with a comparator.
///
/// Returns the number of surviving elements.
///
/// # Examples
/// ```
/// use symtab_core::sort_dedup_by;
/// let mut v = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')];
/// let n = sort_dedup_by(&mut v, |a, b| a.0.cmp(&b.0));
/// assert_eq!(&v[..n], &[(1, 'b'), (2, 'd'), (3, 'a')]);
/// ```
pub fn sort_dedup_by<T, F>(values: &mut [T], mut cmp: F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_dedup_slice(values, &mut cmp)
}

/// Sort and deduplicate `values` in place by a derived key.
pub fn sort_dedup_by_key<T, K, F>(values: &mut [T], mut key: F) -> usize
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_dedup_slice(values, &mut |a: &T, b: &T| key(a).cmp(&key(b)))
}

/// Sort and deduplicate `values` in place by their natural order.
pub fn sort_dedup<T: Ord + Clone>(values: &mut [T]) -> usize {
    sort_dedup_slice(values, &mut |a: &T, b: &T| a.cmp(b))
}

fn sort_dedup_slice<T, F>(values: &mut [T], cmp: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = values.len();
    match len {
        0 | 1 => return len,
        2 => {
            return match cmp(&values[0], &values[1]) {
                Ordering::Less => 2,
                Ordering::Greater => {
                    values.swap(0, 1);
                    2
                }
                // The second element is the duplicate.
                Ordering::Equal => 1,
            };
        }
        _ => {}
    }

    let (left, right) = values.split_at_mut(len / 2);
    let left_len = sort_dedup_slice(left, cmp);
    let right_len = sort_dedup_slice(right, cmp);

    let mut merged = Vec::with_capacity(left_len + right_len);
    let (mut i, mut j) = (0, 0);
    while i < left_len && j < right_len {
        match cmp(&left[i], &right[j]) {
            Ordering::Less => {
                merged.push(left[i].clone());
                i += 1;
            }
            Ordering::Greater => {
                merged.push(right[j].clone());
                j += 1;
            }
            Ordering::Equal => {
                merged.push(left[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&left[i..left_len]);
    merged.extend_from_slice(&right[j..right_len]);

    let count = merged.len();
    for (slot, value) in values.iter_mut().zip(merged) {
        *slot = value;
    }
    count
}

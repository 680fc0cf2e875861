//! Longest-prefix search over name-sorted entries.

/// Entry whose key is the longest prefix of `input`.
///
/// `sorted` must be ordered by `key`. Each round takes the greatest key not
/// above the current target; if it is not a prefix, the target shrinks to
/// the bytes they share and the search repeats on that.
pub fn find_longest_prefix<'a, T, F>(sorted: &'a [T], input: &str, key: F) -> Option<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut target = input.as_bytes();
    loop {
        let (mut lo, mut hi) = (0, sorted.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if key(&sorted[mid]).as_bytes() <= target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        let candidate = &sorted[lo.checked_sub(1)?];
        let candidate_key = key(candidate).as_bytes();

        if target.starts_with(candidate_key) {
            return Some(candidate);
        }

        let common = candidate_key
            .iter()
            .zip(target)
            .take_while(|(a, b)| a == b)
            .count();
        target = &target[..common];
    }
}

use crate::{sort_dedup, sort_dedup_by, sort_dedup_by_key};

/// First-occurrence-wins reference: keep the first of each key, then stable sort.
fn reference(input: &[(i32, usize)]) -> Vec<(i32, usize)> {
    let mut seen = std::collections::HashSet::new();
    let mut kept: Vec<_> = input.iter().copied().filter(|(k, _)| seen.insert(*k)).collect();
    kept.sort_by_key(|(k, _)| *k);
    kept
}

fn xorshift(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

#[test]
fn empty_and_single() {
    let mut empty: [i32; 0] = [];
    assert_eq!(sort_dedup(&mut empty), 0);

    let mut one = [7];
    assert_eq!(sort_dedup(&mut one), 1);
    assert_eq!(one, [7]);
}

#[test]
fn pair_in_order() {
    let mut v = [1, 2];
    assert_eq!(sort_dedup(&mut v), 2);
    assert_eq!(v, [1, 2]);
}

#[test]
fn pair_swapped() {
    let mut v = [2, 1];
    assert_eq!(sort_dedup(&mut v), 2);
    assert_eq!(v, [1, 2]);
}

#[test]
fn pair_equal_keeps_first() {
    let mut v = [(5, 'a'), (5, 'b')];
    let n = sort_dedup_by_key(&mut v, |e| e.0);
    assert_eq!(n, 1);
    assert_eq!(v[0], (5, 'a'));
}

#[test]
fn duplicates_across_halves_keep_first() {
    let mut v = [(3, 0), (1, 1), (2, 2), (3, 3), (1, 4), (0, 5)];
    let n = sort_dedup_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(&v[..n], &[(0, 5), (1, 1), (2, 2), (3, 0)]);
}

#[test]
fn all_equal_collapses_to_first() {
    let mut v: Vec<(i32, usize)> = (0..17).map(|i| (4, i)).collect();
    let n = sort_dedup_by_key(&mut v, |e| e.0);
    assert_eq!(n, 1);
    assert_eq!(v[0], (4, 0));
}

#[test]
fn already_sorted_unique_is_untouched() {
    let mut v: Vec<i32> = (0..100).collect();
    let n = sort_dedup(&mut v);
    assert_eq!(n, 100);
    assert!(v.iter().copied().eq(0..100));
}

#[test]
fn fibonacci_keys_drop_the_repeated_one() {
    let mut v = [0i64, 1, 1, 2, 3, 5, 8, 13, 21];
    let n = sort_dedup(&mut v);
    assert_eq!(&v[..n], &[0, 1, 2, 3, 5, 8, 13, 21]);
}

#[test]
fn matches_reference_on_random_inputs() {
    let mut state = 0x9e37_79b9_7f4a_7c15;
    for len in 0..64 {
        let input: Vec<(i32, usize)> = (0..len)
            .map(|i| ((xorshift(&mut state) % 12) as i32, i))
            .collect();

        let mut work = input.clone();
        let n = sort_dedup_by_key(&mut work, |e| e.0);

        assert_eq!(&work[..n], reference(&input).as_slice(), "input: {input:?}");
    }
}

#[test]
fn output_is_strictly_increasing() {
    let mut state = 42;
    let mut v: Vec<u64> = (0..500).map(|_| xorshift(&mut state) % 300).collect();
    let n = sort_dedup(&mut v);
    assert!(v[..n].windows(2).all(|w| w[0] < w[1]));
}

use super::{Lookup, Representation, SPARSE_SLACK, Table, TablePolicy, select_representation};

fn xorshift(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

#[test]
fn threshold_is_exclusive() {
    // 3 entries: sparse only once the spread exceeds 2 * 3 + 256.
    let limit = 2 * 3 + SPARSE_SLACK;
    assert_eq!(select_representation(0, limit, 3), Representation::Dense);
    assert_eq!(select_representation(0, limit + 1, 3), Representation::Sparse);
    assert_eq!(select_representation(-10, 10, 3), Representation::Dense);
}

#[test]
fn auto_picks_dense_for_compact_keys() {
    let table = Table::new(&[0i32, 1, 2], &["Red", "Orange", "Yellow"], "");
    assert_eq!(table.representation(), Representation::Dense);
}

#[test]
fn auto_picks_sparse_for_spread_keys() {
    let table = Table::new(&[0i64, 1, 1_000_000], &["a", "b", "c"], "");
    assert_eq!(table.representation(), Representation::Sparse);
    assert!(table.validate_map());
}

#[test]
fn auto_on_empty_input_is_dense() {
    let table: Table<u8, u8> = Table::new(&[], &[], 0);
    assert_eq!(table.representation(), Representation::Dense);
    assert!(table.is_empty());
}

#[test]
fn forced_policies_override_selection() {
    let keys = [0i64, 1_000_000];
    let sparse = Table::with_policy(&[0i32, 1], &[1, 2], 0, TablePolicy::Sparse);
    let dense = Table::with_policy(&keys, &[1, 2], 0, TablePolicy::Dense);

    assert_eq!(sparse.representation(), Representation::Sparse);
    assert_eq!(dense.representation(), Representation::Dense);
}

#[test]
fn dense_and_sparse_agree() {
    let mut state = 0x2545_f491_4f6c_dd1d;
    for round in 0..40 {
        let len = (round % 13) + 1;
        let keys: Vec<i32> = (0..len)
            .map(|_| (xorshift(&mut state) % 40) as i32 - 20)
            .collect();
        let values: Vec<usize> = (0..len).collect();

        let dense = Table::with_policy(&keys, &values, usize::MAX, TablePolicy::Dense);
        let sparse = Table::with_policy(&keys, &values, usize::MAX, TablePolicy::Sparse);

        let min = *keys.iter().min().unwrap();
        let max = *keys.iter().max().unwrap();
        for key in (min - 1)..=(max + 1) {
            assert_eq!(dense.contains(key), sparse.contains(key), "key {key} in {keys:?}");
            assert_eq!(dense.get(key), sparse.get(key), "key {key} in {keys:?}");
            assert_eq!(dense.get_or_default(key), sparse.get_or_default(key));
        }
        assert_eq!(dense.len(), sparse.len());
    }
}

#[test]
fn surviving_value_is_first_declared() {
    let keys = [7u32, 3, 7, 3, 9];
    let values = ["a", "b", "c", "d", "e"];

    for policy in [TablePolicy::Dense, TablePolicy::Sparse] {
        let table = Table::with_policy(&keys, &values, "", policy);
        assert_eq!(table.get(7), Some(&"a"));
        assert_eq!(table.get(3), Some(&"b"));
        assert_eq!(table.get(9), Some(&"e"));
    }
}

#[test]
fn lookup_trait_is_uniform() {
    fn count_hits<T: Lookup<i32, char>>(table: &T) -> usize {
        (0..10).filter(|k| table.contains(*k)).count()
    }

    let keys = [1, 3, 5];
    let values = ['a', 'b', 'c'];
    let dense = Table::with_policy(&keys, &values, ' ', TablePolicy::Dense);
    let sparse = Table::with_policy(&keys, &values, ' ', TablePolicy::Sparse);

    assert_eq!(count_hits(&dense), 3);
    assert_eq!(count_hits(&sparse), 3);
}

use super::{DenseTable, Lookup};

#[test]
fn get_present_and_absent() {
    let table = DenseTable::new(&[0i32, 1, 2], &["Red", "Orange", "Yellow"], "<unnamed>");

    assert_eq!(table.get(1), Some(&"Orange"));
    assert_eq!(table.get(5), None);
    assert_eq!(table.get(-1), None);
    assert_eq!(table.get_or(5, &"Unknown"), &"Unknown");
    assert_eq!(table.get_or_default(7), &"<unnamed>");
}

#[test]
fn holes_are_absent() {
    let table = DenseTable::new(&[10u8, 14], &['a', 'b'], '-');

    assert_eq!(table.slot_count(), 5);
    assert_eq!(table.len(), 2);
    assert!(table.contains(10));
    assert!(!table.contains(12));
    assert_eq!(table.get_or_default(12), &'-');
    assert_eq!(table.key_range(), Some((10, 14)));
}

#[test]
fn first_write_wins() {
    let table = DenseTable::new(&[3i64, 1, 3, 1], &[30, 10, 31, 11], 0);

    assert_eq!(table.get(3), Some(&30));
    assert_eq!(table.get(1), Some(&10));
    assert_eq!(table.len(), 2);
}

#[test]
fn empty_table() {
    let table: DenseTable<i32, u32> = DenseTable::new(&[], &[], 0);

    assert!(table.is_empty());
    assert_eq!(table.slot_count(), 0);
    assert_eq!(table.key_range(), None);
    assert!(!table.contains(0));
    assert_eq!(table.get_or_default(0), &0);
}

#[test]
fn extreme_keys_do_not_overflow() {
    let table = DenseTable::new(&[i8::MIN, i8::MAX], &[1, 2], 0);

    assert_eq!(table.slot_count(), 256);
    assert_eq!(table.get(i8::MIN), Some(&1));
    assert_eq!(table.get(i8::MAX), Some(&2));
    assert_eq!(table.get(0), None);
}

#[test]
fn iter_in_key_order() {
    let table = DenseTable::new(&[5u16, 2, 4], &["e", "b", "d"], "");
    let items: Vec<_> = table.iter().collect();

    assert_eq!(items, vec![(2, &"b"), (4, &"d"), (5, &"e")]);
}

#[test]
fn lookup_trait_dispatch() {
    fn probe(table: &dyn Lookup<i32, &'static str>, key: i32) -> &'static str {
        *table.get_or(key, &"none")
    }

    let table = DenseTable::new(&[0, 1], &["zero", "one"], "");
    assert_eq!(probe(&table, 1), "one");
    assert_eq!(probe(&table, 2), "none");
}

#[test]
#[should_panic(expected = "DenseTable: 2 keys but 1 values")]
fn mismatched_lengths_panic() {
    let _ = DenseTable::new(&[0i32, 1], &["a"], "");
}

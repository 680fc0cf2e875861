use indoc::indoc;

use crate::{Declaration, Error, assign_values, parse_declarations};

#[test]
fn parse_manifest() {
    let json = indoc! {r#"
        [
            {"name": "Red", "value": 16711680},
            {"name": "Orange"},
            {"name": "Yellow", "value": -3}
        ]
    "#};

    let decls = parse_declarations(json).unwrap();
    assert_eq!(
        decls,
        vec![
            Declaration::new("Red", Some(0xff0000)),
            Declaration::new("Orange", None),
            Declaration::new("Yellow", Some(-3)),
        ]
    );
}

#[test]
fn parse_rejects_malformed_json() {
    let err = parse_declarations(r#"[{"value": 1}]"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn implicit_values_count_from_zero() {
    let decls = [
        Declaration::new("A", None),
        Declaration::new("B", None),
        Declaration::new("C", None),
    ];
    let pairs: Vec<(String, u8)> = assign_values(&decls).unwrap();
    assert_eq!(
        pairs,
        vec![("A".into(), 0), ("B".into(), 1), ("C".into(), 2)]
    );
}

#[test]
fn explicit_value_resets_counter() {
    let decls = [
        Declaration::new("Low", Some(-2)),
        Declaration::new("Mid", None),
        Declaration::new("High", Some(10)),
        Declaration::new("Higher", None),
        Declaration::new("Alias", Some(-2)),
        Declaration::new("AfterAlias", None),
    ];
    let values: Vec<i32> = assign_values::<i32>(&decls)
        .unwrap()
        .into_iter()
        .map(|(_, v)| v)
        .collect();
    assert_eq!(values, vec![-2, -1, 10, 11, -2, -1]);
}

#[test]
fn out_of_range_value_is_reported() {
    let decls = [Declaration::new("Ok", Some(255)), Declaration::new("Overflow", None)];
    let err = assign_values::<u8>(&decls).unwrap_err();

    assert!(matches!(
        &err,
        Error::ValueOutOfRange { name, value: 256 } if name == "Overflow"
    ));
    assert_eq!(err.to_string(), "value 256 of `Overflow` does not fit the key type");
}

#[test]
fn negative_rejected_for_unsigned() {
    let decls = [Declaration::new("Neg", Some(-1))];
    assert!(assign_values::<u64>(&decls).is_err());
    assert!(assign_values::<i64>(&decls).is_ok());
}

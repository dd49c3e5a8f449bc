//! Exact-output matrix for the stringify grammar.

use json_convert_value::{obj, stringify, TreeValue};

#[test]
fn stringify_grammar_matrix() {
    let cases: Vec<(TreeValue, &str)> = vec![
        (TreeValue::Str(String::new()), r#""""#),
        (TreeValue::Str("hello".into()), r#""hello""#),
        (TreeValue::Num(0), "0"),
        (TreeValue::Num(-123), "-123"),
        (TreeValue::Num(i64::MAX), "9223372036854775807"),
        (TreeValue::Arr(vec![]), "[]"),
        (
            TreeValue::Arr(vec![TreeValue::Str("x".into()), TreeValue::Num(7)]),
            r#"["x",7]"#,
        ),
        (
            TreeValue::Arr(vec![TreeValue::Arr(vec![TreeValue::Num(1)])]),
            "[[1]]",
        ),
        (obj::<&str, _>([]), "{}"),
        (
            obj([("a", TreeValue::Num(1)), ("b", TreeValue::Num(2))]),
            r#"{"a":1,"b":2}"#,
        ),
        (
            obj([(
                "xs",
                TreeValue::Arr(vec![obj([("k", TreeValue::Str("v".into()))])]),
            )]),
            r#"{"xs":[{"k":"v"}]}"#,
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(stringify(&value), expected, "value: {value:?}");
    }
}

#[test]
fn field_order_is_preserved_not_sorted() {
    let v = obj([
        ("zebra", TreeValue::Num(1)),
        ("apple", TreeValue::Num(2)),
        ("mango", TreeValue::Num(3)),
    ]);
    assert_eq!(stringify(&v), r#"{"zebra":1,"apple":2,"mango":3}"#);
}

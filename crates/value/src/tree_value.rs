//! [`TreeValue`] — the closed intermediate value union.

use std::fmt;

use indexmap::IndexMap;

use crate::stringify;

/// A closed, tagged union representing any serializable value.
///
/// The union has exactly four variants; every converter must map its source
/// type into one of them. `Obj` fields keep insertion order and hold unique
/// keys; order is preserved through [`stringify`](crate::stringify()), never
/// re-sorted. Trees are plain owned data, so they are finite, acyclic, and
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeValue {
    Str(String),
    Num(i64),
    Arr(Vec<TreeValue>),
    Obj(IndexMap<String, TreeValue>),
}

impl TreeValue {
    /// Short tag name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            TreeValue::Str(_) => "str",
            TreeValue::Num(_) => "num",
            TreeValue::Arr(_) => "arr",
            TreeValue::Obj(_) => "obj",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TreeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<i64> {
        match self {
            TreeValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_arr(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::Arr(xs) => Some(xs),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<&IndexMap<String, TreeValue>> {
        match self {
            TreeValue::Obj(fields) => Some(fields),
            _ => None,
        }
    }

    /// Render this tree to its text form. See [`stringify`](crate::stringify()).
    pub fn stringify(&self) -> String {
        stringify(self)
    }
}

/// Build an `Obj` from `(key, value)` pairs, keeping pair order.
///
/// A repeated key replaces the earlier value but keeps the earlier position,
/// so the unique-keys invariant holds for any input.
pub fn obj<K, I>(fields: I) -> TreeValue
where
    K: Into<String>,
    I: IntoIterator<Item = (K, TreeValue)>,
{
    TreeValue::Obj(
        fields
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect(),
    )
}

impl From<&str> for TreeValue {
    fn from(s: &str) -> Self {
        TreeValue::Str(s.to_owned())
    }
}

impl From<String> for TreeValue {
    fn from(s: String) -> Self {
        TreeValue::Str(s)
    }
}

impl From<i64> for TreeValue {
    fn from(n: i64) -> Self {
        TreeValue::Num(n)
    }
}

impl From<i32> for TreeValue {
    fn from(n: i32) -> Self {
        TreeValue::Num(n as i64)
    }
}

impl From<i16> for TreeValue {
    fn from(n: i16) -> Self {
        TreeValue::Num(n as i64)
    }
}

impl From<u32> for TreeValue {
    fn from(n: u32) -> Self {
        TreeValue::Num(n as i64)
    }
}

impl From<u16> for TreeValue {
    fn from(n: u16) -> Self {
        TreeValue::Num(n as i64)
    }
}

impl From<u8> for TreeValue {
    fn from(n: u8) -> Self {
        TreeValue::Num(n as i64)
    }
}

impl From<Vec<TreeValue>> for TreeValue {
    fn from(xs: Vec<TreeValue>) -> Self {
        TreeValue::Arr(xs)
    }
}

impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls_pick_the_right_variant() {
        assert_eq!(TreeValue::from("x"), TreeValue::Str("x".into()));
        assert_eq!(TreeValue::from(7i64), TreeValue::Num(7));
        assert_eq!(TreeValue::from(7u32), TreeValue::Num(7));
        assert_eq!(
            TreeValue::from(vec![TreeValue::Num(1)]),
            TreeValue::Arr(vec![TreeValue::Num(1)])
        );
    }

    #[test]
    fn obj_keeps_pair_order() {
        let v = obj([("b", TreeValue::Num(2)), ("a", TreeValue::Num(1))]);
        let fields = v.as_obj().unwrap();
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn obj_repeated_key_keeps_first_position() {
        let v = obj([
            ("a", TreeValue::Num(1)),
            ("b", TreeValue::Num(2)),
            ("a", TreeValue::Num(3)),
        ]);
        let fields = v.as_obj().unwrap();
        assert_eq!(fields.len(), 2);
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(fields["a"], TreeValue::Num(3));
    }

    #[test]
    fn accessors() {
        assert_eq!(TreeValue::Str("x".into()).as_str(), Some("x"));
        assert_eq!(TreeValue::Num(5).as_num(), Some(5));
        assert_eq!(TreeValue::Num(5).as_str(), None);
        assert_eq!(TreeValue::Num(5).type_name(), "num");
        assert_eq!(obj::<&str, _>([]).type_name(), "obj");
    }

    #[test]
    fn display_matches_stringify() {
        let v = obj([("a", TreeValue::Num(1))]);
        assert_eq!(v.to_string(), v.stringify());
    }
}

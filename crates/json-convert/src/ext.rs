//! Attached-call sugar over the dispatch front-end.

use json_convert_value::{stringify, TreeValue};

use crate::convert::convert;
use crate::error::ConvertError;
use crate::scope::Scope;

/// Free-form composition of conversion and rendering:
/// `stringify(convert(scope, value)?)`.
pub fn to_json_string<T: 'static>(scope: &Scope, value: &T) -> Result<String, ConvertError> {
    Ok(stringify(&convert(scope, value)?))
}

/// Method-form calls attached to every convertible value.
///
/// Pure syntax sugar: both methods delegate to the free functions, so the
/// attached and free forms are the same computation and produce
/// byte-identical output for the same input.
pub trait ToTreeExt: Sized + 'static {
    /// Attached form of [`convert`](crate::convert()).
    fn to_tree(&self, scope: &Scope) -> Result<TreeValue, ConvertError> {
        convert(scope, self)
    }

    /// Attached form of [`to_json_string`].
    fn to_json(&self, scope: &Scope) -> Result<String, ConvertError> {
        to_json_string(scope, self)
    }
}

impl<T: Sized + 'static> ToTreeExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attached_and_free_forms_are_equivalent() {
        let scope = Scope::with_defaults();
        let n: i64 = 42;
        let free = convert(&scope, &n).unwrap();
        let attached = n.to_tree(&scope).unwrap();
        assert_eq!(free, attached);
        assert_eq!(
            to_json_string(&scope, &n).unwrap(),
            n.to_json(&scope).unwrap()
        );
        assert_eq!(n.to_json(&scope).unwrap(), "42");
    }

    #[test]
    fn to_json_composes_convert_and_stringify() {
        let scope = Scope::with_defaults();
        let s = String::from("hello");
        assert_eq!(s.to_json(&scope).unwrap(), r#""hello""#);
        assert_eq!(
            s.to_json(&scope).unwrap(),
            stringify(&s.to_tree(&scope).unwrap())
        );
    }

    #[test]
    fn attached_form_fails_closed_like_the_free_form() {
        let scope = Scope::new();
        let n: i64 = 1;
        assert_eq!(
            n.to_tree(&scope).unwrap_err(),
            convert(&scope, &n).unwrap_err()
        );
    }
}

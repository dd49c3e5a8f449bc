//! Dispatch front-end over scoped resolution.

use json_convert_value::TreeValue;

use crate::error::ConvertError;
use crate::scope::Scope;

/// Convert `value` through the unique converter visible for `T` in `scope`.
///
/// Structural converters compose by calling `convert` (or [`convert_slice`])
/// on each field or element themselves; there is no reflection-based
/// traversal, so coverage is explicit and checkable via
/// [`Scope::check`](crate::Scope::check) before any value flows. Pure: the
/// input is never mutated, and on error no partially-built tree escapes.
pub fn convert<T: 'static>(scope: &Scope, value: &T) -> Result<TreeValue, ConvertError> {
    let converter = scope.resolve::<T>()?;
    converter.apply(scope, value)
}

/// Convert a homogeneous slice into an `Arr`, element order preserved.
///
/// The element converter is resolved once, before any element is touched;
/// conversion then fails fast on the first element error.
pub fn convert_slice<T: 'static>(
    scope: &Scope,
    values: &[T],
) -> Result<TreeValue, ConvertError> {
    let converter = scope.resolve::<T>()?;
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        out.push(converter.apply(scope, value)?);
    }
    Ok(TreeValue::Arr(out))
}

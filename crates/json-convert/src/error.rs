//! Resolution and dispatch error types.

use thiserror::Error;

use crate::scope::Tier;

/// Binding-time failures of converter resolution.
///
/// Both variants are raised by [`Scope::resolve`](crate::Scope::resolve)
/// before any value is converted; resolution never silently defaults a
/// missing converter or tie-breaks an ambiguous one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no converter found for type `{type_name}`")]
    NoConverterFound { type_name: &'static str },
    #[error("ambiguous converter for type `{type_name}`: {count} registered at the {tier} tier")]
    AmbiguousConverter {
        type_name: &'static str,
        tier: Tier,
        count: usize,
    },
}

/// Failure of a [`convert`](crate::convert()) call.
///
/// Converters are contractually pure and total, so the only failure class is
/// a resolution error, possibly raised for a nested field's type. On error no
/// partially-built tree escapes; conversion is all-or-nothing per call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

//! Closed JSON-like value tree and its text renderer.
//!
//! [`TreeValue`] is the format-agnostic intermediate representation every
//! typed value is converted into before rendering; [`stringify()`] is the
//! pure recursive renderer over it.

mod stringify;
mod tree_value;

pub use stringify::{stringify, stringify_escaped};
pub use tree_value::{obj, TreeValue};

pub use indexmap::IndexMap;

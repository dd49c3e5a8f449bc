//! Per-type converter registries and dispatch producing json-convert value
//! trees.
//!
//! Typed values are converted into the closed [`TreeValue`] union through a
//! converter looked up in a three-tier [`Scope`] (local > imported > default)
//! and then rendered by [`stringify`]. Converters are pure and total;
//! structural converters recurse explicitly over their fields, so the set of
//! convertible types is exactly the set of registered types, checkable before
//! any value flows.
//!
//! ```
//! use json_convert::{convert, obj, Scope, ToTreeExt};
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! let mut scope = Scope::with_defaults();
//! scope.register_local::<User, _>(|scope, u| {
//!     Ok(obj([
//!         ("name", convert(scope, &u.name)?),
//!         ("age", convert(scope, &u.age)?),
//!     ]))
//! });
//!
//! let user = User { name: "John".into(), age: 34 };
//! assert_eq!(user.to_json(&scope).unwrap(), r#"{"name":"John","age":34}"#);
//! ```

mod convert;
mod error;
mod ext;
mod registry;
mod scope;

pub use convert::{convert, convert_slice};
pub use error::{ConvertError, ResolveError};
pub use ext::{to_json_string, ToTreeExt};
pub use registry::{ConvertFn, Converter, Registry};
pub use scope::{ResolvedConverter, Scope, Tier};

pub use json_convert_value::{obj, stringify, stringify_escaped, TreeValue};

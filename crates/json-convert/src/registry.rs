//! Append-only converter storage.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use json_convert_value::TreeValue;

use crate::error::ConvertError;
use crate::scope::Scope;

/// Typed conversion closure: pure and total for its source type. Structural
/// converters receive the scope so they can recurse on fields and elements.
pub type ConvertFn<T> =
    Arc<dyn Fn(&Scope, &T) -> Result<TreeValue, ConvertError> + Send + Sync>;

/// A type-erased converter entry.
///
/// Built only through [`Converter::new`], which records the source `TypeId`
/// alongside the closure, so recovering the typed form at resolution time is
/// keyed by the same identifier that guarded registration. The registry holds
/// the closure behind an `Arc` reference, it does not own the conversion
/// logic.
#[derive(Clone)]
pub struct Converter {
    type_id: TypeId,
    type_name: &'static str,
    func: Arc<dyn Any + Send + Sync>,
}

impl Converter {
    pub fn new<T, F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&Scope, &T) -> Result<TreeValue, ConvertError> + Send + Sync + 'static,
    {
        let func: ConvertFn<T> = Arc::new(f);
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            func: Arc::new(func),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Recover the typed closure. Returns `None` only if `T` differs from the
    /// type this entry was registered under.
    pub(crate) fn typed<T: 'static>(&self) -> Option<ConvertFn<T>> {
        self.func.downcast_ref::<ConvertFn<T>>().cloned()
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Append-only multimap from source type to converters.
///
/// Duplicate registrations for one type are retained rather than overwritten:
/// resolution needs to see them to fail closed on ambiguity. There is no
/// removal; a registry is populated at wiring time and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: HashMap<TypeId, Vec<Converter>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a converter for `T`.
    pub fn register<T, F>(&mut self, f: F)
    where
        T: 'static,
        F: Fn(&Scope, &T) -> Result<TreeValue, ConvertError> + Send + Sync + 'static,
    {
        self.insert(Converter::new::<T, F>(f));
    }

    /// Append a pre-built converter entry.
    pub fn insert(&mut self, converter: Converter) {
        self.entries
            .entry(converter.type_id())
            .or_default()
            .push(converter);
    }

    /// All converters registered for `T`, in registration order.
    pub fn lookup<T: 'static>(&self) -> &[Converter] {
        self.entries
            .get(&TypeId::of::<T>())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

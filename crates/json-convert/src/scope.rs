//! Scoped converter resolution.
//!
//! A [`Scope`] is an explicit, ordered stack of three registries consulted in
//! priority order: converters declared at the call site (local), converters
//! explicitly brought in by the caller (imported), and the companion
//! converters of the types' own defining modules (default). The first tier
//! with any match wins and shadows the tiers below it; more than one match at
//! the winning tier is an ambiguity and fails closed.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use json_convert_value::TreeValue;

use crate::error::{ConvertError, ResolveError};
use crate::registry::{ConvertFn, Registry};

/// Resolution precedence tier, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Local,
    Imported,
    Default,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Local => "local",
            Tier::Imported => "imported",
            Tier::Default => "default",
        })
    }
}

/// A typed handle to the converter resolution picked for `T`.
///
/// Obtained from [`Scope::resolve`] before any value flows, so a missing or
/// ambiguous binding surfaces at wiring time, not mid-conversion.
pub struct ResolvedConverter<T> {
    func: ConvertFn<T>,
    _marker: PhantomData<fn(&T)>,
}

impl<T> ResolvedConverter<T> {
    /// Run the conversion. Never mutates `value`; the scope is passed through
    /// so structural converters can recurse.
    pub fn apply(&self, scope: &Scope, value: &T) -> Result<TreeValue, ConvertError> {
        (self.func)(scope, value)
    }
}

impl<T> Clone for ResolvedConverter<T> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ResolvedConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResolvedConverter<{}>", type_name::<T>())
    }
}

/// The three-tier resolution scope.
///
/// Registration happens at wiring time through the `register_*` methods and
/// must complete before the scope is shared; afterwards the scope is used
/// through `&Scope` only and is safe to read from any number of threads.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    local: Registry,
    imported: Registry,
    defaults: Registry,
}

impl Scope {
    /// An empty scope with no converters at any tier.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope whose default tier holds the primitive companion converters:
    /// `String` to `Str` and the integer widths up to `i64` to `Num`.
    pub fn with_defaults() -> Self {
        let mut scope = Self::new();
        scope.register_default::<String, _>(|_, s| Ok(TreeValue::Str(s.clone())));
        scope.register_default::<i64, _>(|_, n| Ok(TreeValue::Num(*n)));
        scope.register_default::<i32, _>(|_, n| Ok(TreeValue::Num(*n as i64)));
        scope.register_default::<i16, _>(|_, n| Ok(TreeValue::Num(*n as i64)));
        scope.register_default::<u32, _>(|_, n| Ok(TreeValue::Num(*n as i64)));
        scope.register_default::<u16, _>(|_, n| Ok(TreeValue::Num(*n as i64)));
        scope.register_default::<u8, _>(|_, n| Ok(TreeValue::Num(*n as i64)));
        scope
    }

    /// Register a converter at the local tier (call-site scope).
    pub fn register_local<T, F>(&mut self, f: F)
    where
        T: 'static,
        F: Fn(&Scope, &T) -> Result<TreeValue, ConvertError> + Send + Sync + 'static,
    {
        self.local.register::<T, F>(f);
    }

    /// Register a converter at the imported tier.
    pub fn register_imported<T, F>(&mut self, f: F)
    where
        T: 'static,
        F: Fn(&Scope, &T) -> Result<TreeValue, ConvertError> + Send + Sync + 'static,
    {
        self.imported.register::<T, F>(f);
    }

    /// Register a converter at the default (companion) tier.
    pub fn register_default<T, F>(&mut self, f: F)
    where
        T: 'static,
        F: Fn(&Scope, &T) -> Result<TreeValue, ConvertError> + Send + Sync + 'static,
    {
        self.defaults.register::<T, F>(f);
    }

    fn tiers(&self) -> [(Tier, &Registry); 3] {
        [
            (Tier::Local, &self.local),
            (Tier::Imported, &self.imported),
            (Tier::Default, &self.defaults),
        ]
    }

    /// Resolve the unique converter visible for `T`.
    ///
    /// Tiers are scanned highest-first; the first tier holding any match wins
    /// and shadows lower tiers entirely. Exactly one match at the winning
    /// tier yields a [`ResolvedConverter`]; more than one is
    /// [`ResolveError::AmbiguousConverter`], and no match at any tier is
    /// [`ResolveError::NoConverterFound`]. Never picks silently.
    pub fn resolve<T: 'static>(&self) -> Result<ResolvedConverter<T>, ResolveError> {
        for (tier, registry) in self.tiers() {
            let matches = registry.lookup::<T>();
            match matches.len() {
                0 => continue,
                1 => {
                    // Entries are stored under the TypeId recorded by
                    // Converter::new and looked up under TypeId::of::<T>(),
                    // so the entry always holds a closure for T.
                    let Some(func) = matches[0].typed::<T>() else {
                        unreachable!(
                            "converter registered under `{}` holds a mismatched closure",
                            type_name::<T>()
                        );
                    };
                    return Ok(ResolvedConverter {
                        func,
                        _marker: PhantomData,
                    });
                }
                count => {
                    return Err(ResolveError::AmbiguousConverter {
                        type_name: type_name::<T>(),
                        tier,
                        count,
                    })
                }
            }
        }
        Err(ResolveError::NoConverterFound {
            type_name: type_name::<T>(),
        })
    }

    /// Verify at wiring time that resolution succeeds for `T`.
    pub fn check<T: 'static>(&self) -> Result<(), ResolveError> {
        self.resolve::<T>().map(|_| ())
    }
}

use std::{any::Any, fmt, sync::Arc};

/// A named composite type that can live in a [`Value::Object`](crate::Value::Object).
///
/// Acceptance is nominal: a list declared for type `"Shape"` accepts any object
/// whose [`type_name`](Composite::type_name) is `"Shape"` or whose
/// [`supertypes`](Composite::supertypes) list it.
///
/// Usually derived with `#[derive(Composite)]` (feature `derive`).
pub trait Composite: Any + fmt::Debug + Send + Sync {
    /// Runtime name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Every type name this type can stand in for, transitively.
    fn supertypes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Value-equality against another composite of any type.
    fn eq_composite(&self, other: &dyn Composite) -> bool;

    fn as_any(&self) -> &dyn Any;

    #[inline]
    fn is_a(&self, name: &str) -> bool {
        self.type_name() == name || self.supertypes().contains(&name)
    }
}

/// Shared, immutable handle to a composite value.
#[derive(Clone)]
pub struct Object(Arc<dyn Composite>);

impl Object {
    pub fn new<C: Composite>(value: C) -> Self {
        Self(Arc::new(value))
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    #[inline]
    pub fn is_a(&self, name: &str) -> bool {
        self.0.is_a(name)
    }

    pub fn downcast_ref<C: Composite>(&self) -> Option<&C> {
        self.0.as_any().downcast_ref::<C>()
    }

    pub fn as_composite(&self) -> &dyn Composite {
        &*self.0
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_composite(&*other.0)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

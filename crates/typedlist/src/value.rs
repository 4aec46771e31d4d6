use std::{borrow::Cow, fmt::Debug};

use crate::{AcceptedType, Composite, Object};

/// Element model a [`TypedList`](crate::TypedList) can gate by type.
///
/// [`Value`] is the default implementation. Custom models only need to
/// report a kind name for error messages and answer the membership test.
pub trait ListValue
where
    Self: Sized + Debug + Clone + PartialEq + Send + Sync + 'static,
{
    /// Name of the observed runtime kind, as shown in type mismatch errors.
    fn kind_name(&self) -> Cow<'_, str>;

    /// Returns true if this value is a member of `accepted`.
    fn is_a(&self, accepted: &AcceptedType) -> bool;
}

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn object<C: Composite>(value: C) -> Self {
        Self::Object(Object::new(value))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl ListValue for Value {
    fn kind_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object(o) => o.type_name(),
        })
    }

    fn is_a(&self, accepted: &AcceptedType) -> bool {
        match (self, accepted) {
            (Self::Object(o), AcceptedType::Named(name)) => o.is_a(name),
            (Self::String(_), AcceptedType::String)
            | (Self::Integer(_), AcceptedType::Integer)
            | (Self::Double(_), AcceptedType::Double)
            | (Self::Boolean(_), AcceptedType::Boolean)
            | (Self::Array(_), AcceptedType::Array) => true,
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Double(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

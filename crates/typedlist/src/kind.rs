use std::{borrow::Cow, fmt, str::FromStr};

use crate::{Error, Result};

/// The element type a [`TypedList`](crate::TypedList) accepts.
///
/// Fixed at construction. Floating-point spellings collapse into
/// [`AcceptedType::Double`], so a list built from `"float"` reports `"double"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AcceptedType {
    String,
    Integer,
    Double,
    Boolean,
    Array,
    /// A composite type, matched by name against [`Composite::is_a`](crate::Composite::is_a).
    Named(Cow<'static, str>),
}

impl AcceptedType {
    /// Shorthand for a composite type name known at compile time.
    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }

    /// Parses a type tag, folding aliases into their canonical kind.
    pub fn parse(tag: &str) -> Result<Self> {
        let ty = match tag {
            "string" => Self::String,
            "integer" => Self::Integer,
            "float" | "double" => Self::Double,
            "boolean" => Self::Boolean,
            "array" => Self::Array,
            name if is_type_name(name) => Self::Named(Cow::Owned(name.to_owned())),
            _ => return Err(Error::InvalidTypeDescriptor(tag.to_owned())),
        };
        Ok(ty)
    }

    /// Returns the canonical tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Named(name) => name,
        }
    }

    /// Returns all accepted spellings of a primitive kind, canonical first.
    /// Named types have none: their only spelling is the name itself.
    pub fn possible_strings(&self) -> &'static [&'static str] {
        match self {
            Self::String => &["string"],
            Self::Integer => &["integer"],
            Self::Double => &["double", "float"],
            Self::Boolean => &["boolean"],
            Self::Array => &["array"],
            Self::Named(_) => &[],
        }
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '\\'))
}

impl FromStr for AcceptedType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AcceptedType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for AcceptedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

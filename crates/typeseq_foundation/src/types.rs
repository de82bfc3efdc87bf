//! Type descriptors for element validation.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::RegistryConfig;

/// Type descriptor declaring which values a collection accepts.
///
/// A descriptor is either a scalar kind, a nominal class/interface name, or the
/// [`Type::Untyped`] marker used when no type could be inferred.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The null type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Array of arbitrary values.
    Array,
    /// Any object instance, regardless of class.
    Object,
    /// A declared class or interface name.
    ///
    /// Accepts objects whose class is, extends, or implements the name.
    Named(Arc<str>),
    /// No element type could be determined. Accepts no value.
    Untyped,
}

impl Type {
    /// Creates a nominal type for the given class or interface name.
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Looks up a scalar kind by name.
    ///
    /// Returns `None` for names that are not scalar kinds under `config`;
    /// nominal names are resolved by [`crate::TypeRegistry`].
    #[must_use]
    pub fn scalar(name: &str, config: &RegistryConfig) -> Option<Self> {
        let folded;
        let key = if config.case_insensitive {
            folded = name.to_ascii_lowercase();
            folded.as_str()
        } else {
            name
        };

        Self::canonical(key).or_else(|| {
            if config.accept_aliases {
                Self::alias(key)
            } else {
                None
            }
        })
    }

    /// Scalar names accepted in every configuration.
    fn canonical(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Nil),
            "boolean" => Some(Self::Bool),
            "integer" => Some(Self::Int),
            "double" | "float" => Some(Self::Float),
            "string" => Some(Self::String),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    /// Short scalar names accepted when aliases are enabled.
    fn alias(name: &str) -> Option<Self> {
        match name {
            "nil" => Some(Self::Nil),
            "bool" => Some(Self::Bool),
            "int" => Some(Self::Int),
            "str" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns true if this is a scalar kind (not nominal, not untyped).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Named(_) | Self::Untyped)
    }

    /// Returns true if this is the untyped marker.
    #[must_use]
    pub const fn is_untyped(&self) -> bool {
        matches!(self, Self::Untyped)
    }

    /// Returns the nominal name, if this is a named type.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "null"),
            Self::Bool => write!(f, "boolean"),
            Self::Int => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::Named(name) => write!(f, "{name}"),
            Self::Untyped => write!(f, "untyped"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

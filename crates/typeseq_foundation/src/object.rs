//! Classes, interfaces, and object instances.
//!
//! Nominal types are the only element types that need more than a tag
//! comparison: an object conforms to a name when its class is that name or
//! has it among its supertypes. Classes are declared through
//! [`crate::TypeRegistry`], which computes the supertype closure once.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::LtMap;
use crate::value::Value;

/// Whether a declaration is a concrete class or an interface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// A class that can be instantiated.
    Class,
    /// An interface; only useful as a supertype.
    Interface,
}

/// A declared class or interface.
///
/// `supertypes` holds every ancestor class and implemented interface,
/// transitively, so conformance is a single membership test.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Class {
    name: Arc<str>,
    kind: ClassKind,
    supertypes: Vec<Arc<str>>,
}

impl Class {
    pub(crate) fn new(name: Arc<str>, kind: ClassKind, supertypes: Vec<Arc<str>>) -> Self {
        Self {
            name,
            kind,
            supertypes,
        }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// Returns whether this is a class or an interface.
    #[must_use]
    pub const fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Returns true if this is an interface.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// Returns all ancestor classes and implemented interfaces.
    #[must_use]
    pub fn supertypes(&self) -> &[Arc<str>] {
        &self.supertypes
    }

    /// Returns true if this class is, extends, or implements `name`.
    #[must_use]
    pub fn is_a(&self, name: &str) -> bool {
        &*self.name == name || self.supertypes.iter().any(|s| &**s == name)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ClassKind::Class => write!(f, "class {}", self.name),
            ClassKind::Interface => write!(f, "interface {}", self.name),
        }
    }
}

/// An instance of a declared class.
///
/// Objects are immutable; [`Object::with_field`] returns a new instance.
#[derive(Clone)]
pub struct Object {
    class: Arc<Class>,
    fields: LtMap<Arc<str>, Value>,
}

impl Object {
    /// Creates an instance of `class` with no fields.
    #[must_use]
    pub fn new(class: Arc<Class>) -> Self {
        Self {
            class,
            fields: LtMap::new(),
        }
    }

    /// Returns the instance's class.
    #[must_use]
    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    /// Returns true if the instance's class is, extends, or implements `name`.
    #[must_use]
    pub fn is_a(&self, name: &str) -> bool {
        self.class.is_a(name)
    }

    /// Gets a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(&Arc::from(name))
    }

    /// Returns a copy of this object with a field set.
    #[must_use]
    pub fn with_field(&self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self {
            class: Arc::clone(&self.class),
            fields: self.fields.insert(name.into(), value.into()),
        }
    }

    /// Returns an iterator over the fields.
    pub fn fields(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.fields.iter()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.class.name == other.class.name && self.fields == other.fields
    }
}

impl Eq for Object {}

impl Hash for Object {
    // Field order is unspecified, so only order-independent parts are hashed.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.name.hash(state);
        self.fields.len().hash(state);
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.class.name, self.fields)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.class.name)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }
        write!(f, " }}")
    }
}

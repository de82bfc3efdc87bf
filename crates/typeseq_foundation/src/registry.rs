//! Declared classes and interfaces, and type-name resolution.
//!
//! The registry is the only place a type *name* becomes a [`Type`]. Scalar
//! names resolve directly; anything else must have been declared as a class
//! or interface first.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::Result;
use crate::config::RegistryConfig;
use crate::error::Error;
use crate::object::{Class, ClassKind, Object};
use crate::types::Type;

/// Table of declared classes and interfaces.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    config: RegistryConfig,
    /// Lookup key (case-folded when configured) to declaration.
    classes: HashMap<String, Arc<Class>>,
}

impl TypeRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            classes: HashMap::new(),
        }
    }

    /// Returns the registry's configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the number of declared classes and interfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Declares an interface extending the given interfaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or any parent is undeclared.
    pub fn declare_interface(&mut self, name: &str, extends: &[&str]) -> Result<Arc<Class>> {
        self.declare(name, ClassKind::Interface, extends)
    }

    /// Declares a class with an optional parent class and implemented interfaces.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or any supertype is undeclared.
    pub fn declare_class(
        &mut self,
        name: &str,
        parent: Option<&str>,
        implements: &[&str],
    ) -> Result<Arc<Class>> {
        let supers: Vec<&str> = parent.into_iter().chain(implements.iter().copied()).collect();
        self.declare(name, ClassKind::Class, &supers)
    }

    fn declare(&mut self, name: &str, kind: ClassKind, supers: &[&str]) -> Result<Arc<Class>> {
        let key = self.key(name);
        if self.classes.contains_key(&key) || Type::scalar(name, &self.config).is_some() {
            return Err(Error::duplicate_type(name));
        }

        let mut supertypes: Vec<Arc<str>> = Vec::new();
        for parent in supers {
            let parent = self
                .lookup(parent)
                .ok_or_else(|| Error::unknown_supertype(*parent))?;
            let closure = std::iter::once(parent.name()).chain(parent.supertypes());
            for ancestor in closure {
                if !supertypes.contains(ancestor) {
                    supertypes.push(Arc::clone(ancestor));
                }
            }
        }

        let class = Arc::new(Class::new(name.into(), kind, supertypes));
        trace!(%class, "declared");
        self.classes.insert(key, Arc::clone(&class));
        Ok(class)
    }

    /// Looks up a declared class or interface by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Arc<Class>> {
        self.classes.get(&self.key(name))
    }

    /// Creates an instance of a declared class.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a declared class. Interfaces
    /// cannot be instantiated.
    pub fn instantiate(&self, name: &str) -> Result<Object> {
        match self.lookup(name) {
            Some(class) if !class.is_interface() => Ok(Object::new(Arc::clone(class))),
            _ => Err(Error::unknown_type(name)),
        }
    }

    /// Resolves a type name to a descriptor.
    ///
    /// Scalar names take precedence; otherwise the name must be a declared
    /// class or interface, and resolves to its declared spelling.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is neither a scalar kind nor declared.
    pub fn resolve(&self, name: &str) -> Result<Type> {
        let resolved = Type::scalar(name, &self.config)
            .or_else(|| {
                self.lookup(name)
                    .map(|class| Type::Named(Arc::clone(class.name())))
            })
            .ok_or_else(|| Error::unknown_type(name))?;
        trace!(name, %resolved, "resolved type name");
        Ok(resolved)
    }

    fn key(&self, name: &str) -> String {
        if self.config.case_insensitive {
            name.to_ascii_lowercase()
        } else {
            name.to_owned()
        }
    }
}

//! Values, type descriptors, and the type guard for typeseq.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value carried by typed collections
//! - [`Type`] - Type descriptors (scalar kinds and nominal names)
//! - [`TypeRegistry`] - Class/interface declarations and name resolution
//! - [`guard`] - Conformance checks that every insertion passes through
//! - [`Error`] - The two error kinds, with context
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod config;
pub mod error;
pub mod guard;
pub mod object;
pub mod registry;
pub mod types;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use config::RegistryConfig;
pub use error::{Error, ErrorContext, ErrorKind, InvalidArgument};
pub use object::{Class, ClassKind, Object};
pub use registry::TypeRegistry;
pub use types::Type;
pub use value::Value;

/// Result type for typeseq operations.
pub type Result<T> = std::result::Result<T, Error>;

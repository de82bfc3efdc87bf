//! typeseq - Runtime-checked, homogeneously-typed persistent collections
//!
//! This crate re-exports all layers of typeseq for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: typeseq_collection  - Typed collection, slicing, search, transforms
//! Layer 0: typeseq_foundation  - Core types (Value, Type, TypeRegistry, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use typeseq::{Collection, Type, Value};
//!
//! let numbers = Collection::new(Type::Int, vec![Value::Int(1), Value::Int(2)])?;
//! let more = numbers.add(3)?;
//!
//! assert_eq!(numbers.len(), 2);
//! assert_eq!(more.len(), 3);
//! assert!(more.add("three").is_err());
//! # Ok::<(), typeseq::Error>(())
//! ```

pub use typeseq_collection as collection;
pub use typeseq_foundation as foundation;

pub use typeseq_collection::Collection;
pub use typeseq_foundation::{Error, Result, Type, TypeRegistry, Value};

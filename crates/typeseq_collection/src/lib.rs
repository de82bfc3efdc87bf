//! The runtime-checked, persistent typed collection for typeseq.
//!
//! This crate provides:
//! - [`Collection`] - An ordered sequence whose elements all conform to one [`Type`]
//! - [`Iter`] / [`IntoIter`] - Iteration over a collection
//!
//! Operations are grouped by concern:
//! - construction, indexed access, and membership changes (`collection`)
//! - inclusive slicing and the take/drop family (`slice`)
//! - searching, predicates, and folds (`search`)
//! - filtering, ordering, merging, and mapping (`transform`)
//!
//! [`Type`]: typeseq_foundation::Type

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod collection;
mod index;
mod iter;
mod search;
mod slice;
mod transform;

pub use collection::Collection;
pub use iter::{IntoIter, Iter};

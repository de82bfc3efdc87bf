//! Integration tests for Layer 1: Collection
//!
//! Tests construction, persistence, slicing, search, and transforms through
//! the public `typeseq` facade.

mod construction;
mod nominal;
mod persistence;
mod scenarios;

use typeseq::{Collection, Type, Value};

pub(crate) fn ints(values: &[i64]) -> Collection {
    Collection::new(Type::Int, values.iter().copied().map(Value::Int)).unwrap()
}

pub(crate) fn as_ints(c: &Collection) -> Vec<i64> {
    c.iter().filter_map(Value::as_int).collect()
}

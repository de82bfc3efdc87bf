//! Integration tests for Value types
//!
//! Tests Value variants, equality, hashing, display, and runtime types.

use std::collections::HashSet;
use std::sync::Arc;

use typeseq_foundation::{LtVec, Type, TypeRegistry, Value};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_nil() {
    let v = Value::Nil;
    assert!(v.is_nil());
    assert_eq!(v.value_type(), Type::Nil);
}

#[test]
fn value_scalars() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(42).as_int(), Some(42));
    assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::String(Arc::from("hi")).as_str(), Some("hi"));
}

#[test]
fn value_accessors_do_not_coerce() {
    assert_eq!(Value::Int(1).as_float(), None);
    assert_eq!(Value::Float(1.0).as_int(), None);
    assert_eq!(Value::from("1").as_int(), None);
    assert_eq!(Value::Nil.as_bool(), None);
}

#[test]
fn value_from_conversions() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i32), Value::Int(7));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(2.5), Value::Float(2.5));
    assert_eq!(Value::from(String::from("s")), Value::from("s"));
    assert_eq!(Value::from(None::<i64>), Value::Nil);
    assert_eq!(Value::from(Some(3i64)), Value::Int(3));
}

#[test]
fn value_array_from_vec() {
    let v = Value::from(vec![1, 2, 3]);
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items.get(0), Some(&Value::Int(1)));
    assert_eq!(v.value_type(), Type::Array);
}

// =============================================================================
// Runtime Types
// =============================================================================

#[test]
fn value_type_per_variant() {
    assert_eq!(Value::Bool(false).value_type(), Type::Bool);
    assert_eq!(Value::Int(0).value_type(), Type::Int);
    assert_eq!(Value::Float(0.0).value_type(), Type::Float);
    assert_eq!(Value::from("").value_type(), Type::String);
    assert_eq!(Value::Array(LtVec::new()).value_type(), Type::Array);
}

#[test]
fn object_value_type_is_class_name() {
    let mut registry = TypeRegistry::new();
    registry.declare_class("Point", None, &[]).unwrap();
    let point = Value::from(registry.instantiate("Point").unwrap());
    assert_eq!(point.value_type(), Type::named("Point"));
    assert!(point.as_object().is_some());
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn value_equality_is_structural() {
    assert_eq!(Value::from(vec![1, 2]), Value::from(vec![1, 2]));
    assert_ne!(Value::from(vec![1, 2]), Value::from(vec![2, 1]));
    assert_ne!(Value::Int(1), Value::Float(1.0));
}

#[test]
fn value_nan_equals_itself() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(nan, nan.clone());
}

#[test]
fn value_hash_set_dedupes() {
    let set: HashSet<Value> = [Value::Int(1), Value::Int(1), Value::from("1"), Value::Nil]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn object_equality_uses_fields() {
    let mut registry = TypeRegistry::new();
    registry.declare_class("Point", None, &[]).unwrap();
    let origin = registry.instantiate("Point").unwrap().with_field("x", 0);
    let moved = origin.with_field("x", 1);

    assert_ne!(Value::from(origin.clone()), Value::from(moved.clone()));
    assert_eq!(origin.field("x"), Some(&Value::Int(0)));
    assert_eq!(moved.field("x"), Some(&Value::Int(1)));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn value_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::from("abc").to_string(), "abc");
    assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
}

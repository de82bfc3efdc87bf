//! Construction, typing, and indexed access.

use typeseq::foundation::{InvalidArgument, RegistryConfig};
use typeseq::{Collection, Type, TypeRegistry, Value};

use crate::{as_ints, ints};

#[test]
fn new_rejects_first_offender_with_position() {
    let err = Collection::new(
        Type::String,
        vec![Value::from("a"), Value::Int(1), Value::Bool(true)],
    )
    .unwrap_err();
    assert_eq!(
        err.invalid_argument(),
        Some(&InvalidArgument::TypeMismatch {
            expected: Type::String,
            actual: Type::Int,
            position: Some(1),
        })
    );
}

#[test]
fn float_collection_does_not_promote_ints() {
    assert!(Collection::new(Type::Float, vec![Value::Int(1)]).is_err());
    let floats = Collection::new(Type::Float, vec![Value::Float(1.0)]).unwrap();
    assert!(floats.add(2).is_err());
    assert!(floats.add(2.0).is_ok());
}

#[test]
fn named_uses_registry_config() {
    let relaxed = TypeRegistry::new();
    assert!(Collection::named(&relaxed, "Str", vec![Value::from("a")]).is_ok());

    let strict = TypeRegistry::with_config(RegistryConfig::strict());
    assert!(Collection::named(&strict, "Str", vec![]).is_err());
    assert!(Collection::named(&strict, "string", vec![]).is_ok());
}

#[test]
fn nil_and_array_element_types() {
    let nils = Collection::new(Type::Nil, vec![Value::Nil, Value::Nil]).unwrap();
    assert_eq!(nils.count(), 2);

    let arrays = Collection::infer(vec![Value::from(vec![1]), Value::from(vec!["a"])]).unwrap();
    assert_eq!(arrays.ty(), &Type::Array);
}

#[test]
fn two_tier_index_policy() {
    let c = ints(&[10, 20]);
    assert_eq!(c.at(1).unwrap(), &Value::Int(20));
    assert!(c.at(-1).unwrap_err().is_invalid_argument());
    assert!(c.at(2).unwrap_err().is_out_of_range());
    assert!(c.remove_at(2).unwrap_err().is_out_of_range());
    assert!(c.index_exists(1).unwrap());
    assert!(!c.index_exists(2).unwrap());
    assert!(c.index_exists(-5).is_err());
}

#[test]
fn errors_carry_operation_and_type() {
    let err = ints(&[1]).at(-1).unwrap_err();
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.operation, Some("at"));
    assert_eq!(ctx.element_type, Some(Type::Int));
}

#[test]
fn empty_untyped_collection() {
    let c = Collection::infer(vec![]).unwrap();
    assert!(c.is_empty());
    assert!(c.ty().is_untyped());
    assert_eq!(c.first(), None);
    assert_eq!(c.last(), None);
    assert_eq!(c.to_array(), Vec::<Value>::new());
}

#[test]
fn to_array_copies() {
    let c = ints(&[1, 2]);
    let mut copy = c.to_array();
    copy.push(Value::Int(3));
    assert_eq!(as_ints(&c), vec![1, 2]);
}

#[test]
fn equality_includes_type() {
    let a = Collection::empty(Type::Int);
    let b = Collection::empty(Type::String);
    assert_ne!(a, b);
    assert_eq!(a, ints(&[]));
}

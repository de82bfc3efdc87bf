//! Persistent derivation and the in-place mutators.

use typeseq::foundation::InvalidArgument;
use typeseq::{Collection, Type, Value};

use crate::{as_ints, ints};

#[test]
fn derived_collections_are_independent() {
    let base = ints(&[1, 2, 3]);
    let a = base.add(4).unwrap();
    let b = base.remove_at(0).unwrap();
    let c = base.reverse();

    assert_eq!(as_ints(&base), vec![1, 2, 3]);
    assert_eq!(as_ints(&a), vec![1, 2, 3, 4]);
    assert_eq!(as_ints(&b), vec![2, 3]);
    assert_eq!(as_ints(&c), vec![3, 2, 1]);
}

#[test]
fn in_place_insert_does_not_leak_into_clones() {
    let mut parent = ints(&[1, 3]);
    let snapshot = parent.clone();
    let child = parent.filter(|_| true);

    parent.insert_in_place(1, 2).unwrap();
    parent.insert_range_in_place(-1, vec![Value::Int(4), Value::Int(5)])
        .unwrap();

    assert_eq!(as_ints(&parent), vec![1, 2, 3, 4, 5]);
    assert_eq!(as_ints(&snapshot), vec![1, 3]);
    assert_eq!(as_ints(&child), vec![1, 3]);
}

#[test]
fn in_place_insert_end_requires_range_form() {
    let mut c = ints(&[1, 2]);
    assert!(c.insert_in_place(2, 3).unwrap_err().is_out_of_range());
    c.insert_range_in_place(2, vec![Value::Int(3)]).unwrap();
    assert_eq!(as_ints(&c), vec![1, 2, 3]);
}

#[test]
fn failed_insert_changes_nothing() {
    let mut c = ints(&[1, 2, 3]);
    let before = c.clone();
    assert!(c.insert_range_in_place(1, vec![Value::Int(9), Value::Nil]).is_err());
    assert!(c.insert_range_in_place(-9, vec![Value::Int(9)]).is_err());
    assert!(c.insert_in_place(0, Value::Float(1.0)).is_err());
    assert_eq!(c, before);
}

#[test]
fn untyped_receivers() {
    let mut untyped = Collection::empty(Type::Untyped);
    let err = untyped.insert_in_place(0, 1).unwrap_err();
    assert_eq!(err.invalid_argument(), Some(&InvalidArgument::Untyped));

    let typed = untyped.add(true).unwrap();
    assert_eq!(typed.ty(), &Type::Bool);
    assert!(untyped.ty().is_untyped());
}

#[test]
fn clear_keeps_type_and_receiver() {
    let c = ints(&[1, 2]);
    let cleared = c.clear();
    assert!(cleared.is_empty());
    assert_eq!(cleared.ty(), c.ty());
    assert_eq!(c.len(), 2);
}

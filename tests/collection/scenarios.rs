//! End-to-end scenarios on integer collections.

use std::cmp::Ordering;

use typeseq::{Collection, TypeRegistry, Value};

use crate::{as_ints, ints};

fn integers(values: Vec<Value>) -> Collection {
    Collection::named(&TypeRegistry::new(), "integer", values).unwrap()
}

#[test]
fn add_leaves_original_untouched() {
    let original = integers(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let added = original.add(4).unwrap();
    assert_eq!(as_ints(&added), vec![1, 2, 3, 4]);
    assert_eq!(as_ints(&original), vec![1, 2, 3]);
}

#[test]
fn at_past_end_is_out_of_range() {
    let err = ints(&[1, 2, 3]).at(5).unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn add_wrong_type_is_invalid_argument() {
    let err = integers(vec![]).add("x").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn sort_ascending() {
    let sorted = ints(&[5, 3, 1]).sort(|a, b| {
        let (a, b) = (a.as_int().unwrap_or(0), b.as_int().unwrap_or(0));
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    assert_eq!(as_ints(&sorted), vec![1, 3, 5]);
}

#[test]
fn slice_end_is_inclusive() {
    assert_eq!(as_ints(&ints(&[1, 2, 3]).slice(0, 1).unwrap()), vec![1, 2]);
}

#[test]
fn merge_array_and_reject_scalar() {
    let c = ints(&[1, 2, 3]);
    let merged = c.merge_value(&Value::from(vec![4, 5])).unwrap();
    assert_eq!(as_ints(&merged), vec![1, 2, 3, 4, 5]);

    let err = c.merge_value(&Value::from("x")).unwrap_err();
    assert!(err.is_invalid_argument());
}

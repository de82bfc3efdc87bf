//! Collections of declared classes and interfaces.

use typeseq::{Collection, Type, TypeRegistry, Value};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.declare_interface("Drawable", &[]).unwrap();
    registry.declare_class("Shape", None, &["Drawable"]).unwrap();
    registry.declare_class("Circle", Some("Shape"), &[]).unwrap();
    registry.declare_class("Square", Some("Shape"), &[]).unwrap();
    registry.declare_class("Font", None, &[]).unwrap();
    registry
}

fn make(registry: &TypeRegistry, class: &str, size: i64) -> Value {
    Value::from(registry.instantiate(class).unwrap().with_field("size", size))
}

#[test]
fn interface_collection_accepts_implementors() {
    let registry = registry();
    let drawables = Collection::named(
        &registry,
        "Drawable",
        vec![make(&registry, "Circle", 1), make(&registry, "Square", 2)],
    )
    .unwrap();
    assert_eq!(drawables.ty(), &Type::named("Drawable"));
    assert_eq!(drawables.len(), 2);

    let err = drawables.add(make(&registry, "Font", 12)).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn subclass_collection_rejects_siblings() {
    let registry = registry();
    let circles =
        Collection::named(&registry, "circle", vec![make(&registry, "Circle", 1)]).unwrap();
    assert_eq!(circles.ty(), &Type::named("Circle"));
    assert!(circles.add(make(&registry, "Square", 1)).is_err());
}

#[test]
fn object_collection_accepts_any_instance() {
    let registry = registry();
    let objects = Collection::new(
        Type::Object,
        vec![make(&registry, "Font", 1), make(&registry, "Circle", 1)],
    )
    .unwrap();
    assert_eq!(objects.len(), 2);
    assert!(objects.add(1).is_err());
}

#[test]
fn search_by_field() {
    let registry = registry();
    let shapes = Collection::named(
        &registry,
        "Shape",
        vec![
            make(&registry, "Circle", 3),
            make(&registry, "Square", 5),
            make(&registry, "Circle", 7),
        ],
    )
    .unwrap();

    let size = |v: &Value| {
        v.as_object()
            .and_then(|o| o.field("size"))
            .and_then(Value::as_int)
            .unwrap_or(0)
    };
    assert_eq!(shapes.find_index(|v| size(v) > 4), Some(1));
    assert_eq!(shapes.find_last_index(|v| size(v) > 4), Some(2));
    assert_eq!(shapes.reduce(0, |acc, v| acc + size(v)), 15);

    let circles = shapes.filter(|v| v.as_object().is_some_and(|o| o.is_a("Circle")));
    assert_eq!(circles.len(), 2);
    assert_eq!(circles.ty(), &Type::named("Shape"));
}

#[test]
fn map_objects_to_scalars() {
    let registry = registry();
    let shapes = Collection::named(
        &registry,
        "Shape",
        vec![make(&registry, "Circle", 3), make(&registry, "Square", 5)],
    )
    .unwrap();

    let sizes = shapes
        .map(|v| {
            v.as_object()
                .and_then(|o| o.field("size"))
                .cloned()
                .unwrap_or(Value::Nil)
        })
        .unwrap();
    assert_eq!(sizes.ty(), &Type::Int);
    assert_eq!(sizes.to_array(), vec![Value::Int(3), Value::Int(5)]);
}

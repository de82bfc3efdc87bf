//! The type guard: conformance checks for values entering a collection.
//!
//! Every constructing or inserting operation funnels candidates through
//! [`validate_one`] or [`validate_many`] before touching storage.

use tracing::debug;

use crate::Result;
use crate::error::Error;
use crate::types::Type;
use crate::value::Value;

impl Type {
    /// Returns true if `value` conforms to this type.
    ///
    /// - Scalar kinds match the value's variant exactly (no numeric promotion)
    /// - `Object` accepts any object
    /// - `Named(n)` accepts objects whose class is, extends, or implements `n`
    /// - `Untyped` accepts nothing
    #[must_use]
    pub fn conforms(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Nil, Value::Nil)
            | (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_))
            | (Self::String, Value::String(_))
            | (Self::Array, Value::Array(_))
            | (Self::Object, Value::Object(_)) => true,
            (Self::Named(name), Value::Object(object)) => object.is_a(name),
            _ => false,
        }
    }
}

/// Returns true if `value` conforms to `ty`.
#[must_use]
pub fn conforms(ty: &Type, value: &Value) -> bool {
    ty.conforms(value)
}

/// Fails with a type mismatch if `value` does not conform to `ty`.
///
/// # Errors
///
/// Returns an invalid argument error naming both types.
pub fn validate_one(ty: &Type, value: &Value) -> Result<()> {
    if ty.conforms(value) {
        return Ok(());
    }
    let actual = value.value_type();
    debug!(expected = %ty, %actual, "rejected value");
    Err(Error::type_mismatch(ty.clone(), actual))
}

/// Validates every value in order, failing on the first that does not conform.
///
/// # Errors
///
/// Returns an invalid argument error naming the first offending position.
pub fn validate_many<'a>(ty: &Type, values: impl IntoIterator<Item = &'a Value>) -> Result<()> {
    for (position, value) in values.into_iter().enumerate() {
        if !ty.conforms(value) {
            let actual = value.value_type();
            debug!(expected = %ty, %actual, position, "rejected value");
            return Err(Error::type_mismatch_at(ty.clone(), actual, position));
        }
    }
    Ok(())
}

/// Infers an element type from the first value, or [`Type::Untyped`] if there is none.
#[must_use]
pub fn infer<'a>(values: impl IntoIterator<Item = &'a Value>) -> Type {
    values
        .into_iter()
        .next()
        .map_or(Type::Untyped, Value::value_type)
}

//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Type, TypeRegistry, the guard, and Error.

mod values;

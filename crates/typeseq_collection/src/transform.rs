//! Whole-collection transforms: filtering, ordering, merging, and mapping.
//!
//! Every operation here returns a new collection and leaves the receiver
//! untouched.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;
use typeseq_foundation::{Error, LtVec, Result, Value, guard};

use crate::collection::Collection;

impl Collection {
    /// Returns the elements satisfying `predicate`.
    #[must_use]
    pub fn filter(&self, mut predicate: impl FnMut(&Value) -> bool) -> Self {
        self.derive(self.iter().filter(|&item| predicate(item)).cloned().collect())
    }

    /// Returns the elements not satisfying `predicate`.
    #[must_use]
    pub fn without(&self, mut predicate: impl FnMut(&Value) -> bool) -> Self {
        self.filter(|item| !predicate(item))
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.derive(self.as_lt_vec().reversed())
    }

    /// Returns the elements ordered by `comparator`.
    ///
    /// The sort is stable: equal elements keep their relative order.
    #[must_use]
    pub fn sort(&self, comparator: impl FnMut(&Value, &Value) -> Ordering) -> Self {
        let mut items = self.to_array();
        items.sort_by(comparator);
        self.derive(LtVec::from(items))
    }

    /// Returns the elements in a random order, using the thread-local RNG.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Returns the elements in a random order drawn from `rng`.
    ///
    /// A seeded `rng` gives a reproducible order.
    #[must_use]
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut items = self.to_array();
        items.shuffle(rng);
        self.derive(LtVec::from(items))
    }

    /// Returns this collection followed by the elements of `other`.
    ///
    /// `other` may have a different declared type; each of its elements is
    /// checked against this collection's type.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if an element of `other` does not
    /// conform.
    pub fn merge(&self, other: &Collection) -> Result<Self> {
        self.merge_checked(other.as_lt_vec().clone(), "merge")
    }

    /// Returns this collection followed by `values`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if a value does not conform.
    pub fn merge_values(&self, values: impl IntoIterator<Item = Value>) -> Result<Self> {
        self.merge_checked(values.into_iter().collect(), "merge")
    }

    /// Merges a dynamically-typed source, which must be an array.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `source` is not an array, or if
    /// one of its elements does not conform.
    pub fn merge_value(&self, source: &Value) -> Result<Self> {
        match source {
            Value::Array(values) => self.merge_checked(values.clone(), "merge"),
            other => Err(Error::not_a_sequence(other.value_type())
                .with_context(self.context("merge"))),
        }
    }

    /// An untyped receiver adopts the type of the first incoming value.
    fn merge_checked(&self, incoming: LtVec<Value>, operation: &'static str) -> Result<Self> {
        let ty = if self.ty().is_untyped() {
            guard::infer(&incoming)
        } else {
            self.ty().clone()
        };
        guard::validate_many(&ty, &incoming)
            .map_err(|e| e.with_context(self.context(operation)))?;

        Ok(Collection::from_validated(
            ty,
            self.as_lt_vec().concat(&incoming),
        ))
    }

    /// Applies `transform` to every element.
    ///
    /// The result's type is inferred from the first transformed value; every
    /// other transformed value must conform to it. Mapping an empty
    /// collection yields an empty [`typeseq_foundation::Type::Untyped`] one.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if the transformed values do not
    /// share one type.
    pub fn map(&self, transform: impl FnMut(&Value) -> Value) -> Result<Self> {
        let mapped: LtVec<Value> = self.iter().map(transform).collect();
        let ty = guard::infer(&mapped);
        guard::validate_many(&ty, &mapped).map_err(|e| e.with_context(self.context("map")))?;
        Ok(Collection::from_validated(ty, mapped))
    }
}

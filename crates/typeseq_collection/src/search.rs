//! Searching, predicates, and folds.

use typeseq_foundation::Value;

use crate::collection::Collection;

impl Collection {
    /// Returns the first element satisfying `predicate`.
    #[must_use]
    pub fn find(&self, mut predicate: impl FnMut(&Value) -> bool) -> Option<&Value> {
        self.iter().find(|&item| predicate(item))
    }

    /// Returns the position of the first element satisfying `predicate`.
    #[must_use]
    pub fn find_index(&self, predicate: impl FnMut(&Value) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// Returns the last element satisfying `predicate`.
    #[must_use]
    pub fn find_last(&self, mut predicate: impl FnMut(&Value) -> bool) -> Option<&Value> {
        self.iter().rev().find(|&item| predicate(item))
    }

    /// Returns the position of the last element satisfying `predicate`.
    #[must_use]
    pub fn find_last_index(&self, predicate: impl FnMut(&Value) -> bool) -> Option<usize> {
        self.iter().rposition(predicate)
    }

    /// Returns true if any element satisfies `predicate`.
    #[must_use]
    pub fn contains(&self, predicate: impl FnMut(&Value) -> bool) -> bool {
        self.find_index(predicate).is_some()
    }

    /// Returns true if every element satisfies `predicate`.
    ///
    /// Stops at the first element that does not. Vacuously true when empty.
    #[must_use]
    pub fn every(&self, predicate: impl FnMut(&Value) -> bool) -> bool {
        self.iter().all(predicate)
    }

    /// Calls `procedure` once per element, in order.
    pub fn each(&self, procedure: impl FnMut(&Value)) {
        self.iter().for_each(procedure);
    }

    /// Folds the elements front to back, starting from `initial`.
    #[must_use]
    pub fn reduce<A>(&self, initial: A, combiner: impl FnMut(A, &Value) -> A) -> A {
        self.iter().fold(initial, combiner)
    }

    /// Folds the elements back to front, starting from `initial`.
    #[must_use]
    pub fn reduce_right<A>(&self, initial: A, combiner: impl FnMut(A, &Value) -> A) -> A {
        self.iter().rev().fold(initial, combiner)
    }
}

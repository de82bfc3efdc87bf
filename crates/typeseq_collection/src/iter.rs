//! Iteration over a collection's elements.
//!
//! An [`Iter`] borrows the collection, so the collection cannot be mutated
//! in place while it is being iterated. It walks the snapshot it was created
//! from; derived collections never affect it.

use std::iter::FusedIterator;

use typeseq_foundation::Value;

use crate::collection::Collection;

/// Borrowing iterator over a collection's elements, in order.
pub struct Iter<'a> {
    inner: im::vector::Iter<'a, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over a collection's elements.
pub struct IntoIter {
    inner: im::vector::ConsumingIter<Value>,
}

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl Collection {
    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.as_lt_vec().iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.as_lt_vec().clone().into_iter(),
        }
    }
}

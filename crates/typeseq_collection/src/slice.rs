//! Inclusive slicing and the take/drop family.
//!
//! All ranges here are inclusive at both ends. `end` may equal `len`, which
//! selects a window that runs one past the last element and is clipped.

use typeseq_foundation::{Error, Result, Value};

use crate::collection::Collection;
use crate::index;

impl Collection {
    /// Returns the elements at positions `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error unless
    /// `0 <= start <= end <= len`.
    pub fn slice(&self, start: i64, end: i64) -> Result<Self> {
        let len = self.len();
        if start < 0 || end < 0 || start > end || end > index::signed(len) {
            return Err(Error::slice_bounds(start, end, len).with_context(self.context("slice")));
        }
        let first = index::non_negative(start)?;
        let count = index::non_negative(end - start + 1)?;
        Ok(self.derive(self.as_lt_vec().window(first, count)))
    }

    /// Returns all but the first `n` elements: `slice(n, len)`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `n` is negative or exceeds `len`.
    pub fn drop(&self, n: i64) -> Result<Self> {
        self.slice(n, index::signed(self.len()))
    }

    /// Returns all but the first element: `slice(1, len)`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error on an empty collection.
    pub fn tail(&self) -> Result<Self> {
        self.slice(1, index::signed(self.len()))
    }

    /// Returns the first `n` elements: `slice(0, n - 1)`, or an empty
    /// collection when `n` is zero.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `n` is negative or exceeds
    /// `len + 1`.
    pub fn take(&self, n: i64) -> Result<Self> {
        let n = self.count_arg(n, "take")?;
        if n == 0 {
            return Ok(self.clear());
        }
        self.slice(0, n - 1)
    }

    /// Returns the last `n` elements: `slice(len - n, len)`.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `n` is negative or exceeds `len`.
    pub fn take_right(&self, n: i64) -> Result<Self> {
        let n = self.count_arg(n, "take_right")?;
        let len = index::signed(self.len());
        self.slice(len - n, len)
    }

    /// Returns all but the last `n` elements.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `n` is negative or exceeds `len`.
    pub fn drop_right(&self, n: i64) -> Result<Self> {
        let n = self.count_arg(n, "drop_right")?;
        let len = index::signed(self.len());
        if n == len {
            return Ok(self.clear());
        }
        self.slice(0, len - n - 1)
    }

    /// Returns the longest prefix whose elements all satisfy `predicate`.
    #[must_use]
    pub fn take_while(&self, predicate: impl FnMut(&Value) -> bool) -> Self {
        let count = self.prefix_len(predicate);
        if count == 0 {
            return self.clear();
        }
        self.derive(self.as_lt_vec().window(0, count))
    }

    /// Returns everything after the longest prefix satisfying `predicate`.
    #[must_use]
    pub fn drop_while(&self, predicate: impl FnMut(&Value) -> bool) -> Self {
        let count = self.prefix_len(predicate);
        if count == 0 {
            return self.clone();
        }
        self.derive(self.as_lt_vec().window(count, self.len() - count))
    }

    /// Element counts must be non-negative before any bound arithmetic.
    fn count_arg(&self, n: i64, operation: &'static str) -> Result<i64> {
        if n < 0 {
            return Err(Error::negative_index(n).with_context(self.context(operation)));
        }
        Ok(n)
    }

    fn prefix_len(&self, mut predicate: impl FnMut(&Value) -> bool) -> usize {
        self.iter().take_while(|&item| predicate(item)).count()
    }
}

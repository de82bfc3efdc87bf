//! Shared index validation.
//!
//! Two tiers, applied in order:
//! 1. the index must be non-negative, otherwise an invalid argument error;
//! 2. the index must be below the length, otherwise an out of range error.

use typeseq_foundation::{Error, Result};

/// Tier 1: rejects negative indices.
pub(crate) fn non_negative(index: i64) -> Result<usize> {
    if index < 0 {
        return Err(Error::negative_index(index));
    }
    // Only reachable on targets where usize is narrower than i64.
    Ok(usize::try_from(index).unwrap_or(usize::MAX))
}

/// Tiers 1 and 2: the index must address an existing element.
pub(crate) fn in_bounds(index: i64, len: usize) -> Result<usize> {
    let index = non_negative(index)?;
    if index >= len {
        return Err(Error::out_of_range(index, len));
    }
    Ok(index)
}

/// Tiers 1 and 2 for an insertion point, where `len` itself is allowed.
pub(crate) fn insertion_point(index: i64, len: usize) -> Result<usize> {
    let index = non_negative(index)?;
    if index > len {
        return Err(Error::out_of_range(index, len));
    }
    Ok(index)
}

/// Converts a length to a signed index for bound arithmetic.
pub(crate) fn signed(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

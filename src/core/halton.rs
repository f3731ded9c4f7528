//! Type definitions of Float and Index, the bounds of the index
//! counter, and the validation helpers shared by the direct
//! evaluator, the incremental sequences and the axis composer.

// std
use std::convert::TryFrom;
// others
use hexf::*;
// halton
use crate::core::error::{HaltonError, Result};

pub type Float = f64;

/// The index counter. Its width is fixed here instead of following
/// the build target's `usize`, so the bound below is the same
/// everywhere.
pub type Index = u64;

pub const INDEX_BITS: u32 = Index::BITS;
pub const MAX_INDEX: Index = Index::MAX;

/// Jumps below this many indices are done one step at a time, longer
/// ones rebuild the digit ladder from the target index.
pub const SKIP_STEP_LIMIT: Index = 16;

/// Largest `Float` below one.
pub const ONE_MINUS_EPSILON: Float = hexf64!("0x1.fffffffffffffp-1");

/// How many values a sequence can still produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Remaining {
    Count(usize),
    /// The count does not fit into the host's `usize`.
    Unknown,
}

impl Remaining {
    /// Converts `MAX_INDEX - index` without ever truncating.
    pub fn after(index: Index) -> Remaining {
        match usize::try_from(MAX_INDEX - index) {
            Ok(count) => Remaining::Count(count),
            Err(_) => Remaining::Unknown,
        }
    }
    pub fn count(&self) -> Option<usize> {
        match *self {
            Remaining::Count(count) => Some(count),
            Remaining::Unknown => None,
        }
    }
}

/// A base is a radix of at least two.
pub fn check_base(base: u64) -> Result<u64> {
    if base < 2 {
        Err(HaltonError::InvalidBase(base))
    } else {
        Ok(base)
    }
}

/// The index reached after advancing `n` indices from `index`.
///
/// Landing exactly on `MAX_INDEX` is allowed. From `MAX_INDEX` itself
/// any positive `n` is `Exhausted`, otherwise passing the bound is an
/// `Overflow`.
pub fn checked_target(index: Index, n: Index) -> Result<Index> {
    if n == 0 {
        return Ok(index);
    }
    if index == MAX_INDEX {
        return Err(HaltonError::Exhausted);
    }
    index
        .checked_add(n)
        .ok_or(HaltonError::Overflow { index, n })
}

//! Batch size selection.
//!
//! Larger batches amortise one word across more swap decisions but
//! accumulate more rounding error in the chained multiplication. The tiers
//! keep the accumulated error negligible relative to the remaining length.

use super::MAX_BATCH;

/// Pre-filter bound shared by every length in the small tier (`6! = 720`).
pub const SMALL_TIER_BOUND: u64 = 720;

/// Largest remaining length handled by the small tier.
pub const SMALL_TIER_MAX: u64 = 6;

/// One row of the threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// The tier applies while the remaining length is strictly above this.
    pub above: u64,
    /// Batch size for the tier.
    pub k: usize,
    /// Residual bound above which an extraction is accepted without the
    /// exact threshold. `None` means the bound is the remaining length itself.
    pub bound: Option<u64>,
}

/// Threshold table, most conservative tier first.
pub const TIERS: [Tier; 6] = [
    Tier {
        above: 1 << 30,
        k: 1,
        bound: None,
    },
    Tier {
        above: 1 << 19,
        k: 2,
        bound: Some(1 << 60),
    },
    Tier {
        above: 1 << 14,
        k: 3,
        bound: Some(1 << 57),
    },
    Tier {
        above: 1 << 11,
        k: 4,
        bound: Some(1 << 56),
    },
    Tier {
        above: 1 << 9,
        k: 5,
        bound: Some(1 << 55),
    },
    Tier {
        above: SMALL_TIER_MAX,
        k: MAX_BATCH,
        bound: Some(1 << 54),
    },
];

/// Batch size and pre-filter bound chosen for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    /// Number of indices to extract from one word.
    pub k: usize,
    /// Residuals at or above this are accepted without further checks.
    pub bound: u64,
}

/// Selects the batch for `n` remaining elements, capped at `max_batch`.
///
/// Returns `None` once `n <= 1`: nothing is left to place.
#[inline]
pub fn plan(n: u64, max_batch: usize) -> Option<BatchPlan> {
    if n <= 1 {
        return None;
    }

    let (k, bound) = match TIERS.iter().find(|tier| n > tier.above) {
        Some(tier) => (tier.k, tier.bound.unwrap_or(n)),
        // n - 1 <= 5 here
        None => ((n - 1) as usize, SMALL_TIER_BOUND),
    };

    Some(BatchPlan {
        k: k.min(max_batch),
        bound,
    })
}

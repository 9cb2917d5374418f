//! Bias correction for chained extractions.
//!
//! A batch drawn from one word is uniform over the `P` orderings of its
//! ranges only when the final residual is at least `2^64 mod P`. The tier
//! bound is a cheap pre-filter: residuals at or above it are always safe,
//! and only residuals below it pay for the exact threshold (a division).

use rand::RngCore;
use tracing::trace;

use super::{range_product, Batch, BatchPlan};

/// Exact rejection threshold `(2^64 - p) mod p` for a range product `p`.
///
/// # Panics
///
/// Panics if `p` is zero.
///
/// # Examples
///
/// ```
/// use batched_shuffle::batch::exact_threshold;
///
/// // Powers of two divide 2^64 exactly: nothing is rejected
/// assert_eq!(exact_threshold(1 << 10), 0);
/// // 2^64 = 3 * 6148914691236517205 + 1
/// assert_eq!(exact_threshold(3), 1);
/// ```
#[inline]
pub fn exact_threshold(p: u64) -> u64 {
    p.wrapping_neg() % p
}

/// Draws one accepted batch for `n` remaining elements.
///
/// Fills `batch` with `plan.k` indices and returns the number of extra
/// words consumed by resampling (zero in the common case). The loop has no
/// retry cap: each attempt is rejected with probability below `P / 2^64`.
#[inline]
pub fn draw_batch<R: RngCore + ?Sized>(
    rng: &mut R,
    n: u64,
    plan: BatchPlan,
    batch: &mut Batch,
) -> u64 {
    let mut residual = batch.extract(rng.next_u64(), n, plan.k);
    if residual >= plan.bound {
        return 0;
    }

    let threshold = exact_threshold(range_product(n, plan.k));
    let mut resamples = 0;
    while residual < threshold {
        residual = batch.extract(rng.next_u64(), n, plan.k);
        resamples += 1;
    }
    if resamples > 0 {
        trace!(n, k = plan.k, resamples, "batch resampled");
    }
    resamples
}

//! # Batched Bounded Draws
//!
//! Extracts several bounded indices from a single 64-bit word.
//!
//! ## Chained Multiply-High
//!
//! Multiplying a uniform word `r` by a range `m` as a 128-bit product
//! gives `hi = floor(r * m / 2^64)` in `[0, m)` and a low half carrying the
//! unused fractional precision. Feeding the low half into the next
//! multiplication (by `m - 1`, then `m - 2`, ...) narrows one word into
//! `k` indices. The final low half decides whether the batch is exact:
//!
//! - [`planner`]: chooses `k` and the pre-filter bound from the remaining length
//! - [`Batch`]: holds the indices of one batch on the stack
//! - [`correct`]: rejection sampling against the exact range product
//!
//! ## Reference
//!
//! - Brackett-Rozinsky, N. & Lemire, D. (2024). "Batched Ranged Random
//!   Integer Generation". Software: Practice and Experience.

pub mod correct;
pub mod planner;

pub use correct::{draw_batch, exact_threshold};
pub use planner::{plan, BatchPlan, Tier, TIERS};

/// Largest number of indices drawn from one word.
pub const MAX_BATCH: usize = 6;

/// Full 128-bit product of two words, split into `(hi, lo)`.
#[inline(always)]
pub fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128);
    ((product >> 64) as u64, product as u64)
}

/// Product of the `k` ranges `n, n - 1, ..., n - k + 1`.
///
/// Callers keep this inside `u64`; the tier table guarantees it for every
/// planned batch.
#[inline]
pub fn range_product(n: u64, k: usize) -> u64 {
    (0..k as u64).fold(1u64, |product, j| product * (n - j))
}

/// Indices extracted from one word.
///
/// `indices()[j]` lies in `[0, n - j)` for the `n` the batch was extracted
/// against. Storage is a fixed array so no batch ever allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    indices: [u64; MAX_BATCH],
    len: usize,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch {
    /// Creates an empty batch.
    #[inline]
    pub const fn new() -> Self {
        Self {
            indices: [0; MAX_BATCH],
            len: 0,
        }
    }

    /// Chains `word` through the ranges `n, n - 1, ..., n - k + 1`,
    /// overwriting any previous contents, and returns the final residual.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `k` is zero, above [`MAX_BATCH`], or not
    /// smaller than `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use batched_shuffle::batch::Batch;
    ///
    /// let mut batch = Batch::new();
    /// // 2^63 is one half: it selects the midpoint and leaves nothing over
    /// let residual = batch.extract(1 << 63, 10, 1);
    /// assert_eq!(batch.indices(), &[5]);
    /// assert_eq!(residual, 0);
    /// ```
    #[inline]
    pub fn extract(&mut self, word: u64, n: u64, k: usize) -> u64 {
        debug_assert!((1..=MAX_BATCH).contains(&k), "batch size {} out of range", k);
        debug_assert!((k as u64) < n, "batch size {} needs more than {} elements", k, n);

        let mut residual = word;
        for (j, index) in self.indices[..k].iter_mut().enumerate() {
            let (hi, lo) = mul_wide(residual, n - j as u64);
            *index = hi;
            residual = lo;
        }
        self.len = k;
        residual
    }

    /// Indices of the last extraction, largest range first.
    #[inline]
    pub fn indices(&self) -> &[u64] {
        &self.indices[..self.len]
    }

    /// Number of indices held.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` before the first extraction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

//! Fisher–Yates driver.
//!
//! Walks the unplaced prefix from the back, asking the planner for a batch
//! size, drawing one accepted batch, and applying its indices as ordinary
//! Fisher–Yates swaps. The result is the same distribution as `len - 1`
//! sequential single-element steps.

use rand::RngCore;
use tracing::debug;

use crate::batch::{draw_batch, plan, Batch};
use crate::config::ShuffleConfig;

/// Entropy accounting for one shuffle call.
///
/// # Examples
///
/// ```
/// use batched_shuffle::{shuffle_by_with, ShuffleConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut data: Vec<u32> = (0..1000).collect();
/// let stats = shuffle_by_with(&mut rng, data.len(), &ShuffleConfig::default(), |i, j| {
///     data.swap(i, j)
/// });
///
/// assert_eq!(stats.swaps, 999);
/// // Batches of 5 and 6 need far fewer words than one per element
/// assert!(stats.words < 250);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShuffleStats {
    /// Calls made to the word source.
    pub words: u64,
    /// Batches applied.
    pub batches: u64,
    /// Words spent on rejected extractions.
    pub resamples: u64,
    /// Swaps issued.
    pub swaps: u64,
}

/// Shuffles `len` elements through a swap callback.
///
/// `swap(i, j)` is called exactly `len - 1` times (none when `len <= 1`),
/// always with `i >= j`. The callback must tolerate `i == j`.
///
/// # Examples
///
/// ```
/// use batched_shuffle::shuffle_by;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(12345);
/// let mut names = vec!["a", "b", "c", "d"];
/// shuffle_by(&mut rng, names.len(), |i, j| names.swap(i, j));
///
/// names.sort();
/// assert_eq!(names, ["a", "b", "c", "d"]);
/// ```
#[inline]
pub fn shuffle_by<R, F>(rng: &mut R, len: usize, swap: F)
where
    R: RngCore + ?Sized,
    F: FnMut(usize, usize),
{
    shuffle_by_with(rng, len, &ShuffleConfig::default(), swap);
}

/// Shuffles `len` elements through a swap callback using `config`, and
/// reports how much entropy was consumed.
pub fn shuffle_by_with<R, F>(
    rng: &mut R,
    len: usize,
    config: &ShuffleConfig,
    mut swap: F,
) -> ShuffleStats
where
    R: RngCore + ?Sized,
    F: FnMut(usize, usize),
{
    let mut stats = ShuffleStats::default();
    let mut batch = Batch::new();
    let mut n = len as u64;

    while let Some(batch_plan) = plan(n, config.max_batch()) {
        let resamples = draw_batch(rng, n, batch_plan, &mut batch);
        apply_batch(n, &batch, &mut swap);

        let k = batch_plan.k as u64;
        stats.words += 1 + resamples;
        stats.resamples += resamples;
        stats.batches += 1;
        stats.swaps += k;
        n -= k;
    }

    debug!(
        len,
        max_batch = config.max_batch(),
        words = stats.words,
        resamples = stats.resamples,
        "shuffle complete"
    );
    stats
}

/// Shuffles `len` elements where the caller holds a signed count.
///
/// # Panics
///
/// Panics before drawing any word if `len` is negative: shuffling a
/// negative number of elements is a caller bug.
///
/// # Examples
///
/// ```should_panic
/// use batched_shuffle::shuffle_signed;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// shuffle_signed(&mut rng, -1, |_, _| {});
/// ```
pub fn shuffle_signed<R, F>(rng: &mut R, len: isize, swap: F)
where
    R: RngCore + ?Sized,
    F: FnMut(usize, usize),
{
    assert!(len >= 0, "invalid argument to shuffle: negative length {}", len);
    shuffle_by(rng, len as usize, swap);
}

/// Shuffles a slice in place.
///
/// # Examples
///
/// ```
/// use batched_shuffle::shuffle_slice;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut data: Vec<u64> = (0..100).collect();
/// shuffle_slice(&mut rng, &mut data);
///
/// data.sort_unstable();
/// assert!(data.iter().copied().eq(0..100));
/// ```
#[inline]
pub fn shuffle_slice<R, T>(rng: &mut R, slice: &mut [T])
where
    R: RngCore + ?Sized,
{
    shuffle_by(rng, slice.len(), |i, j| slice.swap(i, j));
}

/// Slice extension for batched shuffling.
///
/// # Examples
///
/// ```
/// use batched_shuffle::BatchedShuffle;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let mut deck: Vec<u8> = (0..52).collect();
/// deck.batched_shuffle(&mut rng);
/// assert_eq!(deck.len(), 52);
/// ```
pub trait BatchedShuffle {
    /// Shuffles `self` in place with the default configuration.
    fn batched_shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R);
}

impl<T> BatchedShuffle for [T] {
    #[inline]
    fn batched_shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        shuffle_slice(rng, self);
    }
}

/// Applies one batch against the suffix ending at `n - 1`.
///
/// The smallest range is placed first so the swaps replay `k` sequential
/// Fisher–Yates steps.
#[inline]
fn apply_batch<F: FnMut(usize, usize)>(n: u64, batch: &Batch, swap: &mut F) {
    for (j, &index) in batch.indices().iter().enumerate().rev() {
        swap((n - 1 - j as u64) as usize, index as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::Replay;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand::RngCore;

    fn record_swaps(rng: &mut impl RngCore, len: usize) -> Vec<(usize, usize)> {
        let mut swaps = Vec::new();
        shuffle_by(rng, len, |i, j| swaps.push((i, j)));
        swaps
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = Replay::new(&[]);
        assert!(record_swaps(&mut rng, 0).is_empty());
        assert!(record_swaps(&mut rng, 1).is_empty());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_two_elements_single_word() {
        // n = 2, k = 1: index = hi(word * 2), the top bit of the word.
        let mut rng = Replay::new(&[u64::MAX]);
        assert_eq!(record_swaps(&mut rng, 2), vec![(1, 1)]);

        let mut rng = Replay::new(&[1]);
        assert_eq!(record_swaps(&mut rng, 2), vec![(1, 0)]);
    }

    #[test]
    fn test_small_tier_swap_order() {
        // n = 4, k = 3 in one word; smallest range applied first.
        let mut rng = Replay::new(&[u64::MAX]);
        assert_eq!(record_swaps(&mut rng, 4), vec![(1, 1), (2, 2), (3, 3)]);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_first_argument_never_smaller() {
        let mut rng = StdRng::seed_from_u64(99);
        for len in [2, 7, 100, 513, 3000] {
            for (i, j) in record_swaps(&mut rng, len) {
                assert!(i >= j, "swap({}, {}) for len {}", i, j, len);
                assert!(i < len);
            }
        }
    }

    #[test]
    fn test_each_position_placed_once() {
        let mut rng = StdRng::seed_from_u64(5);
        let len = 2049;
        let mut placed: Vec<usize> = record_swaps(&mut rng, len)
            .iter()
            .map(|&(i, _)| i)
            .collect();
        placed.sort_unstable();
        assert_eq!(placed, (1..len).collect::<Vec<_>>());
    }

    #[test]
    fn test_stats_word_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = ShuffleConfig::default();
        // 10 elements: one batch of 6 (n = 10), then n = 4 takes k = 3.
        let stats = shuffle_by_with(&mut rng, 10, &config, |_, _| {});
        assert_eq!(stats.batches, 2);
        assert_eq!(stats.swaps, 9);
        assert_eq!(stats.words, stats.batches + stats.resamples);
    }

    #[test]
    fn test_unbatched_uses_one_batch_per_swap() {
        let mut rng = StdRng::seed_from_u64(11);
        let stats = shuffle_by_with(&mut rng, 500, &ShuffleConfig::unbatched(), |_, _| {});
        assert_eq!(stats.batches, 499);
        assert_eq!(stats.swaps, 499);
    }

    #[test]
    fn test_signed_accepts_non_negative() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut count = 0;
        shuffle_signed(&mut rng, 10, |_, _| count += 1);
        assert_eq!(count, 9);
    }

    #[test]
    #[should_panic(expected = "invalid argument to shuffle")]
    fn test_signed_rejects_negative_before_drawing() {
        let mut rng = Replay::new(&[]);
        shuffle_signed(&mut rng, -5, |_, _| panic!("swap called"));
    }

    #[test]
    fn test_slice_extension() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut data: Vec<i32> = (0..64).collect();
        data.batched_shuffle(&mut rng);
        let mut sorted = data.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_swap_count_and_permutation(
            len in 0usize..3000,
            seed in any::<u64>(),
            cap in 1usize..=6,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let config = ShuffleConfig::new(cap).unwrap();
            let mut data: Vec<usize> = (0..len).collect();
            let stats = shuffle_by_with(&mut rng, len, &config, |i, j| data.swap(i, j));

            prop_assert_eq!(stats.swaps, len.saturating_sub(1) as u64);
            data.sort_unstable();
            prop_assert!(data.iter().copied().eq(0..len));
        }
    }
}

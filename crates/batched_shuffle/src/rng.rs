//! Seeded generator with batched shuffling.
//!
//! [`BatchedRng`] wraps a word source together with a [`ShuffleConfig`].
//! It keeps every other capability of the inner generator (it implements
//! [`RngCore`] by delegation) and replaces only shuffling.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::ShuffleConfig;
use crate::shuffle::{shuffle_by_with, ShuffleStats};

/// Random number generator whose shuffles batch several draws per word.
///
/// # Examples
///
/// ```rust
/// use batched_shuffle::BatchedRng;
///
/// let mut rng = BatchedRng::from_seed(42);
/// let mut data: Vec<usize> = (0..10).collect();
/// rng.shuffle_slice(&mut data);
///
/// // Same seed, same permutation
/// let mut again = BatchedRng::from_seed(42);
/// let mut copy: Vec<usize> = (0..10).collect();
/// again.shuffle_slice(&mut copy);
/// assert_eq!(data, copy);
/// ```
#[derive(Debug, Clone)]
pub struct BatchedRng<R = StdRng> {
    /// Source of 64-bit words.
    inner: R,
    /// Batch cap applied to every shuffle.
    config: ShuffleConfig,
    /// Seed used for initialisation, when known.
    seed: Option<u64>,
}

impl BatchedRng<StdRng> {
    /// Creates a `StdRng`-backed instance initialised with `seed`.
    ///
    /// The same seed always yields the same shuffles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batched_shuffle::BatchedRng;
    ///
    /// let rng = BatchedRng::from_seed(12345);
    /// assert_eq!(rng.seed(), Some(12345));
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            config: ShuffleConfig::default(),
            seed: Some(seed),
        }
    }
}

impl<R: RngCore> BatchedRng<R> {
    /// Wraps an existing word source with the default configuration.
    #[inline]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            config: ShuffleConfig::default(),
            seed: None,
        }
    }

    /// Replaces the shuffle configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batched_shuffle::{BatchedRng, ShuffleConfig};
    ///
    /// let rng = BatchedRng::from_seed(1).with_config(ShuffleConfig::unbatched());
    /// assert_eq!(rng.config().max_batch(), 1);
    /// ```
    #[inline]
    pub fn with_config(mut self, config: ShuffleConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the seed used for initialisation, if this instance was seeded.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the shuffle configuration.
    #[inline]
    pub fn config(&self) -> &ShuffleConfig {
        &self.config
    }

    /// Borrows the inner word source.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the inner word source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Shuffles `len` elements through `swap`.
    ///
    /// See [`shuffle_by`](crate::shuffle_by) for the callback contract.
    #[inline]
    pub fn shuffle<F: FnMut(usize, usize)>(&mut self, len: usize, swap: F) -> ShuffleStats {
        shuffle_by_with(&mut self.inner, len, &self.config, swap)
    }

    /// Shuffles `len` elements where the caller holds a signed count.
    ///
    /// # Panics
    ///
    /// Panics before drawing any word if `len` is negative.
    pub fn shuffle_signed<F: FnMut(usize, usize)>(
        &mut self,
        len: isize,
        swap: F,
    ) -> ShuffleStats {
        assert!(len >= 0, "invalid argument to shuffle: negative length {}", len);
        self.shuffle(len as usize, swap)
    }

    /// Shuffles a slice in place.
    #[inline]
    pub fn shuffle_slice<T>(&mut self, slice: &mut [T]) -> ShuffleStats {
        self.shuffle(slice.len(), |i, j| slice.swap(i, j))
    }
}

impl<R: RngCore> RngCore for BatchedRng<R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

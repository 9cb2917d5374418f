//! Shuffle configuration types.

use crate::batch::MAX_BATCH;
use crate::error::ShuffleError;

/// Configuration for batched shuffling.
///
/// The only tunable is the batch cap: the largest number of bounded
/// indices extracted from one 64-bit word. The tier table still decides
/// the batch size for each remaining length; the cap only lowers it.
///
/// # Example
///
/// ```
/// use batched_shuffle::ShuffleConfig;
///
/// // Full tiered batching
/// let config = ShuffleConfig::default();
/// assert_eq!(config.max_batch(), 6);
///
/// // One draw per element (classical Fisher-Yates)
/// let classic = ShuffleConfig::unbatched();
/// assert_eq!(classic.max_batch(), 1);
///
/// assert!(ShuffleConfig::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawShuffleConfig"))]
pub struct ShuffleConfig {
    max_batch: usize,
}

impl Default for ShuffleConfig {
    /// Create a configuration with the full batch range (`max_batch = 6`).
    fn default() -> Self {
        Self {
            max_batch: MAX_BATCH,
        }
    }
}

impl ShuffleConfig {
    /// Create a configuration with the given batch cap.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::InvalidBatchCap`] unless `1 <= max_batch <= 6`.
    pub fn new(max_batch: usize) -> Result<Self, ShuffleError> {
        if max_batch == 0 || max_batch > MAX_BATCH {
            return Err(ShuffleError::InvalidBatchCap {
                requested: max_batch,
                max: MAX_BATCH,
            });
        }
        Ok(Self { max_batch })
    }

    /// Create a configuration that draws one word per element.
    ///
    /// Useful as a baseline when measuring entropy consumption.
    pub fn unbatched() -> Self {
        Self { max_batch: 1 }
    }

    /// Largest batch size this configuration allows.
    #[inline]
    pub fn max_batch(&self) -> usize {
        self.max_batch
    }
}

/// Unvalidated form used when deserialising.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawShuffleConfig {
    max_batch: usize,
}

#[cfg(feature = "serde")]
impl Default for RawShuffleConfig {
    fn default() -> Self {
        Self {
            max_batch: MAX_BATCH,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawShuffleConfig> for ShuffleConfig {
    type Error = ShuffleError;

    fn try_from(raw: RawShuffleConfig) -> Result<Self, Self::Error> {
        ShuffleConfig::new(raw.max_batch)
    }
}

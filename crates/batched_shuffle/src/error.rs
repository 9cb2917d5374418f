//! Error types for shuffle configuration.
//!
//! Shuffling itself has no recoverable failure mode: resampling is normal
//! operation and a negative length is a caller contract violation that
//! panics. The only fallible surface is building a [`ShuffleConfig`].
//!
//! [`ShuffleConfig`]: crate::ShuffleConfig

use thiserror::Error;

/// Errors raised while building a shuffle configuration.
///
/// # Examples
///
/// ```
/// use batched_shuffle::ShuffleError;
///
/// let err = ShuffleError::InvalidBatchCap { requested: 9, max: 6 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid batch cap: 9. Must be between 1 and 6"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    /// The requested batch cap is outside `1..=max`.
    #[error("Invalid batch cap: {requested}. Must be between 1 and {max}")]
    InvalidBatchCap {
        /// Cap that was requested
        requested: usize,
        /// Largest supported batch size
        max: usize,
    },
}

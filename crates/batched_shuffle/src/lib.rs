//! # Batched Shuffle
//!
//! Uniform Fisher–Yates shuffling that draws far fewer 64-bit words than
//! one per element.
//!
//! ## How It Works
//!
//! A classical shuffle draws one bounded integer per position. This crate
//! extracts up to six bounded indices from each 64-bit word by chaining
//! multiply-high reductions, then checks the leftover fractional bits:
//! when they fall below a conservative bound, the batch is re-checked
//! against the exact range product and resampled if it would be biased.
//! The resulting permutation is exactly uniform given a uniform word source.
//!
//! | Remaining length `n` | Indices per word |
//! |----------------------|------------------|
//! | `n > 2^30`           | 1                |
//! | `n > 2^19`           | 2                |
//! | `n > 2^14`           | 3                |
//! | `n > 2^11`           | 4                |
//! | `n > 2^9`            | 5                |
//! | `n > 6`              | 6                |
//! | `2 <= n <= 6`        | `n - 1`          |
//!
//! ## Module Structure
//!
//! - [`batch`]: batch planning, chained extraction and bias correction
//! - [`shuffle`]: the Fisher–Yates driver and slice entry points
//! - [`rng`]: a seeded generator wrapper that shuffles in batches
//! - [`config`]: batch cap configuration
//!
//! ## Usage Example
//!
//! ```rust
//! use batched_shuffle::{shuffle_by, BatchedShuffle};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Any container, through a swap callback
//! let mut data: Vec<u32> = (0..1000).collect();
//! shuffle_by(&mut rng, data.len(), |i, j| data.swap(i, j));
//!
//! // Slices directly
//! let mut deck: Vec<u8> = (0..52).collect();
//! deck.batched_shuffle(&mut rng);
//! ```
//!
//! ## Security
//!
//! Uniformity holds for any uniform word source, but the shuffle adds no
//! unpredictability of its own. Use a cryptographic generator if an
//! observer must not predict the permutation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod batch;
pub mod config;
pub mod error;
pub mod rng;
pub mod shuffle;

#[cfg(test)]
mod test_util;

// Re-export commonly used items for convenience
pub use config::ShuffleConfig;
pub use error::ShuffleError;
pub use rng::BatchedRng;
pub use shuffle::{
    shuffle_by, shuffle_by_with, shuffle_signed, shuffle_slice, BatchedShuffle, ShuffleStats,
};

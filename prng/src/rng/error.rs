//! Error types for generator construction and sampling

use thiserror::Error;

/// Errors that can occur while seeding or drawing from a [`Generator`]
///
/// All errors are detected at the call that violates the precondition
/// and are returned to the caller. None of them leave the generator in
/// a modified state.
///
/// [`Generator`]: crate::Generator
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("Invalid seed: all four state words are zero")]
    InvalidSeed,

    #[error("Insufficient entropy: expected {expected} bytes, got {actual}")]
    InsufficientEntropy { expected: usize, actual: usize },

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i128, max: i128 },

    #[error("Invalid length: byte count must be positive")]
    InvalidLength,

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

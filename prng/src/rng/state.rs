//! Generator state: 256 bits held as four 64-bit words
//!
//! # Critical Invariant
//!
//! The state is never all-zero. The all-zero state is a fixed point of
//! the xoshiro256 transition, so a generator that reached it would emit
//! zeros forever. Every constructor in this crate goes through
//! [`GeneratorState::from_words`], which rejects it, and the transition
//! itself is a bijection on the non-zero states.

use super::error::RngError;
use serde::{Deserialize, Serialize};

/// Four 64-bit words of xoshiro256 state (s0..s3)
///
/// Deserialization validates the non-zero invariant, so a state read
/// from JSON is as trustworthy as one built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u64; 4]", into = "[u64; 4]")]
pub struct GeneratorState {
    pub(crate) s: [u64; 4],
}

impl GeneratorState {
    /// Build a state from four explicit words
    ///
    /// # Errors
    /// Returns [`RngError::InvalidSeed`] if all four words are zero.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::{GeneratorState, RngError};
    ///
    /// assert!(GeneratorState::from_words([1, 2, 3, 4]).is_ok());
    /// assert_eq!(GeneratorState::from_words([0; 4]), Err(RngError::InvalidSeed));
    /// ```
    pub fn from_words(words: [u64; 4]) -> Result<Self, RngError> {
        if words.iter().all(|&w| w == 0) {
            return Err(RngError::InvalidSeed);
        }
        Ok(Self { s: words })
    }

    /// Copy of the four state words
    pub fn words(&self) -> [u64; 4] {
        self.s
    }

    /// True if any word is non-zero (always true for a live state)
    pub fn is_valid(&self) -> bool {
        self.s.iter().any(|&w| w != 0)
    }
}

impl TryFrom<[u64; 4]> for GeneratorState {
    type Error = RngError;

    fn try_from(words: [u64; 4]) -> Result<Self, Self::Error> {
        Self::from_words(words)
    }
}

impl From<GeneratorState> for [u64; 4] {
    fn from(state: GeneratorState) -> Self {
        state.s
    }
}

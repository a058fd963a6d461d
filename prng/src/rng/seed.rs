//! Seed expansion
//!
//! Two ways to get from seed material to a full 256-bit state:
//!
//! - a single `u64` is expanded with four SplitMix64 draws, so nearby
//!   seeds give decorrelated states;
//! - 32 bytes of entropy are read as four little-endian words and then
//!   validated like an explicit four-word seed.

use super::error::RngError;
use super::state::GeneratorState;

/// Number of entropy bytes needed to fill a state
pub const ENTROPY_LEN: usize = 32;

/// Golden-ratio increment used by SplitMix64
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// One SplitMix64 draw
///
/// Adds the golden-ratio increment to `state` and returns the avalanche
/// of the new value. Exposed so callers can reproduce the seed expansion
/// used by [`Generator::new`](crate::Generator::new).
///
/// # Example
/// ```
/// use xoshiro_prng::splitmix64;
///
/// let mut state = 0u64;
/// assert_eq!(splitmix64(&mut state), 0xe220_a839_7b1d_cdaf);
/// assert_eq!(state, 0x9e37_79b9_7f4a_7c15);
/// ```
pub fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Expand a single seed into four state words
///
/// The SplitMix64 finalizer is a bijection and the four inputs are
/// distinct, so at most one output word can be zero.
pub(crate) fn expand_seed(seed: u64) -> GeneratorState {
    let mut sm = seed;
    let words = [
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
    ];
    GeneratorState { s: words }
}

/// Interpret exactly [`ENTROPY_LEN`] bytes as four little-endian words
pub(crate) fn words_from_entropy(bytes: &[u8]) -> Result<[u64; 4], RngError> {
    if bytes.len() != ENTROPY_LEN {
        return Err(RngError::InsufficientEntropy {
            expected: ENTROPY_LEN,
            actual: bytes.len(),
        });
    }

    let mut words = [0u64; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = u64::from_le_bytes(buf);
    }
    Ok(words)
}

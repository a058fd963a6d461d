//! `rand_core` integration
//!
//! Lets a [`Generator`] drive anything written against `RngCore` or
//! `SeedableRng`. The byte and seed conventions match the inherent API:
//! `fill_bytes` uses the little-endian layout of
//! [`Generator::random_bytes`] and `seed_from_u64` is the SplitMix64
//! expansion of [`Generator::new`].

use super::generator::Generator;
use super::seed::{expand_seed, words_from_entropy, ENTROPY_LEN};
use super::state::GeneratorState;
use rand_core::{Error, RngCore, SeedableRng};

impl RngCore for Generator {
    /// High half of one draw; the low bits of xoshiro256+ are weaker
    fn next_u32(&mut self) -> u32 {
        (Generator::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Generator::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Generator::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Generator::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Generator {
    type Seed = [u8; ENTROPY_LEN];

    /// An all-zero seed cannot be a state, and this constructor cannot
    /// fail, so it falls back to `seed_from_u64(0)`.
    fn from_seed(seed: Self::Seed) -> Self {
        match words_from_entropy(&seed).and_then(GeneratorState::from_words) {
            Ok(state) => Generator::from_state(state),
            Err(_) => Generator::from_state(expand_seed(0)),
        }
    }

    fn seed_from_u64(state: u64) -> Self {
        Generator::new(state)
    }
}

//! The generator handle
//!
//! A [`Generator`] exclusively owns one [`GeneratorState`]. It is a plain
//! value: no interior locking, no global instance. Share one across
//! threads behind your own lock, or give each thread its own stream via
//! [`Generator::split`].

use super::entropy::{EntropySource, OsEntropy};
use super::error::RngError;
use super::seed::{expand_seed, words_from_entropy, ENTROPY_LEN};
use super::state::GeneratorState;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Deterministic xoshiro256+ generator
///
/// # Example
/// ```
/// use xoshiro_prng::Generator;
///
/// let mut rng = Generator::new(12345);
/// let word = rng.next_u64();
/// let die = rng.random_int(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// # let _ = word;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    /// Internal state (256-bit, never all-zero)
    state: GeneratorState,
    /// 64-bit words drawn since construction (wrapping)
    #[serde(default)]
    draws: u64,
}

impl Generator {
    /// Create a generator from a single 64-bit seed
    ///
    /// The seed is expanded with SplitMix64, so every `u64`, zero
    /// included, is a valid seed.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::Generator;
    ///
    /// let mut a = Generator::new(7);
    /// let mut b = Generator::new(7);
    /// assert_eq!(a.next_u64(), b.next_u64());
    /// ```
    pub fn new(seed: u64) -> Self {
        debug!("Seeding generator from 64-bit seed");
        trace!("seed = {:#x}", seed);
        Self::from_state(expand_seed(seed))
    }

    /// Create a generator from an optional seed
    ///
    /// `Some(seed)` behaves like [`Generator::new`]; `None` auto-seeds
    /// from the operating system like [`Generator::new_auto`].
    pub fn with_seed(seed: Option<u64>) -> Result<Self, RngError> {
        match seed {
            Some(seed) => Ok(Self::new(seed)),
            None => Self::new_auto(),
        }
    }

    /// Create a generator whose state is exactly `words`
    ///
    /// # Errors
    /// [`RngError::InvalidSeed`] if all four words are zero.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::{Generator, RngError};
    ///
    /// let mut rng = Generator::from_words([1, 2, 3, 4]).unwrap();
    /// assert_eq!(rng.next_u64(), 5);
    ///
    /// assert_eq!(Generator::from_words([0; 4]), Err(RngError::InvalidSeed));
    /// ```
    pub fn from_words(words: [u64; 4]) -> Result<Self, RngError> {
        let state = GeneratorState::from_words(words)?;
        debug!("Seeding generator from explicit state words");
        trace!("words = {:#x?}", words);
        Ok(Self::from_state(state))
    }

    /// Create a generator from 32 bytes of entropy
    ///
    /// The bytes are read as four little-endian words.
    ///
    /// # Errors
    /// - [`RngError::InsufficientEntropy`] if `bytes` is not exactly 32 long
    /// - [`RngError::InvalidSeed`] if all 32 bytes are zero
    pub fn from_entropy_bytes(bytes: &[u8]) -> Result<Self, RngError> {
        let words = words_from_entropy(bytes).map_err(|e| {
            warn!("Rejected entropy buffer: {}", e);
            e
        })?;
        Self::from_words(words)
    }

    /// Create a generator seeded by an entropy collaborator
    ///
    /// The source is asked for 32 bytes once.
    pub fn from_entropy<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self, RngError> {
        debug!("Requesting {} bytes from entropy source", ENTROPY_LEN);
        let bytes = source.entropy_bytes(ENTROPY_LEN)?;
        Self::from_entropy_bytes(&bytes)
    }

    /// Create a generator seeded from operating-system entropy
    pub fn new_auto() -> Result<Self, RngError> {
        Self::from_entropy(&mut OsEntropy)
    }

    pub(crate) fn from_state(state: GeneratorState) -> Self {
        Self { state, draws: 0 }
    }

    /// Generate the next raw 64-bit word
    ///
    /// This advances the internal state and returns a random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.wrapping_add(1);
        self.state.step()
    }

    /// Lazy, endless stream of raw words drawn from this generator
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::Generator;
    ///
    /// let mut rng = Generator::from_words([1, 2, 3, 4]).unwrap();
    /// let first: Vec<u64> = rng.words().take(2).collect();
    /// assert_eq!(first, vec![5, 211_106_232_532_999]);
    /// ```
    pub fn words(&mut self) -> impl Iterator<Item = u64> + '_ {
        std::iter::from_fn(move || Some(self.next_u64()))
    }

    /// Advance the state by 2^128 steps
    ///
    /// Equivalent to 2^128 calls to [`Generator::next_u64`]; used to
    /// carve non-overlapping streams for parallel consumers. Does not
    /// count as draws.
    pub fn jump(&mut self) {
        self.state.jump();
    }

    /// Advance the state by 2^192 steps
    pub fn long_jump(&mut self) {
        self.state.long_jump();
    }

    /// Split off `n` generators on non-overlapping streams
    ///
    /// Child `i` starts where `self` would be after `i` jumps; `self` is
    /// left `n` jumps ahead, on a stream none of the children reach
    /// within 2^128 draws.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::Generator;
    ///
    /// let mut root = Generator::new(99);
    /// let workers = root.split(4);
    /// assert_eq!(workers.len(), 4);
    /// assert_ne!(workers[0].state(), workers[1].state());
    /// ```
    pub fn split(&mut self, n: usize) -> Vec<Generator> {
        debug!("Splitting generator into {} streams", n);
        (0..n)
            .map(|_| {
                let child = Self::from_state(self.state);
                self.state.jump();
                child
            })
            .collect()
    }

    /// Copy of the current state words (for checkpointing/replay)
    pub fn state(&self) -> [u64; 4] {
        self.state.words()
    }

    /// Number of 64-bit words drawn since construction or restore
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub(crate) fn with_draws(mut self, draws: u64) -> Self {
        self.draws = draws;
        self
    }
}

//! Seeding Tests
//!
//! Covers the three construction paths: single 64-bit seed (SplitMix64
//! expansion), four explicit words, and 32 bytes from an entropy source.

use xoshiro_prng::{splitmix64, EntropySource, Generator, RngError, ENTROPY_LEN};

// ============================================================================
// Test Helpers
// ============================================================================

/// Entropy source that replays a fixed buffer regardless of request size
struct FixedEntropy(Vec<u8>);

impl EntropySource for FixedEntropy {
    fn entropy_bytes(&mut self, _len: usize) -> Result<Vec<u8>, RngError> {
        Ok(self.0.clone())
    }
}

/// Entropy source that always fails
struct BrokenEntropy;

impl EntropySource for BrokenEntropy {
    fn entropy_bytes(&mut self, _len: usize) -> Result<Vec<u8>, RngError> {
        Err(RngError::EntropyUnavailable("device offline".to_string()))
    }
}

// ============================================================================
// Single-Seed Expansion
// ============================================================================

#[test]
fn test_seed_zero_expansion() {
    let rng = Generator::new(0);
    assert_eq!(
        rng.state(),
        [
            0xe220_a839_7b1d_cdaf,
            0x6e78_9e6a_a1b9_65f4,
            0x06c4_5d18_8009_454f,
            0xf88b_b8a8_724c_81ec,
        ]
    );
}

#[test]
fn test_seed_42_expansion() {
    let rng = Generator::new(42);
    assert_eq!(
        rng.state(),
        [
            0xbdd7_3226_2feb_6e95,
            0x28ef_e333_b266_f103,
            0x4752_6757_130f_9f52,
            0x581c_e1ff_0e4a_e394,
        ]
    );
}

#[test]
fn test_expansion_is_four_splitmix_draws() {
    let seed = 0xdead_beef_u64;
    let mut sm = seed;
    let expected = [
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
    ];
    assert_eq!(Generator::new(seed).state(), expected);
}

#[test]
fn test_extreme_seeds_valid() {
    for seed in [0, 1, u64::MAX, u64::MAX - 1, 1 << 63] {
        let rng = Generator::new(seed);
        assert_ne!(rng.state(), [0; 4], "seed {} expanded to zero state", seed);
    }
}

// ============================================================================
// Four-Word Seeds
// ============================================================================

#[test]
fn test_words_used_verbatim() {
    let words = [9, 8, 7, 6];
    assert_eq!(Generator::from_words(words).unwrap().state(), words);
}

#[test]
fn test_all_zero_words_rejected() {
    assert_eq!(Generator::from_words([0, 0, 0, 0]), Err(RngError::InvalidSeed));
}

// ============================================================================
// Entropy Seeds
// ============================================================================

#[test]
fn test_entropy_bytes_little_endian() {
    let mut bytes = Vec::with_capacity(ENTROPY_LEN);
    for word in [1u64, 2, 3, 4] {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    let mut rng = Generator::from_entropy_bytes(&bytes).unwrap();
    assert_eq!(rng.state(), [1, 2, 3, 4]);
    assert_eq!(rng.next_u64(), 5);
}

#[test]
fn test_entropy_bytes_wrong_length() {
    for len in [0usize, 8, 31, 33, 64] {
        assert_eq!(
            Generator::from_entropy_bytes(&vec![0xAA; len]),
            Err(RngError::InsufficientEntropy {
                expected: ENTROPY_LEN,
                actual: len
            }),
            "length {} should be rejected",
            len
        );
    }
}

#[test]
fn test_entropy_source_short_buffer() {
    let mut source = FixedEntropy(vec![7; 16]);
    assert_eq!(
        Generator::from_entropy(&mut source),
        Err(RngError::InsufficientEntropy {
            expected: 32,
            actual: 16
        })
    );
}

#[test]
fn test_entropy_source_zero_buffer() {
    let mut source = FixedEntropy(vec![0; 32]);
    assert_eq!(Generator::from_entropy(&mut source), Err(RngError::InvalidSeed));
}

#[test]
fn test_entropy_source_failure_propagates() {
    assert_eq!(
        Generator::from_entropy(&mut BrokenEntropy),
        Err(RngError::EntropyUnavailable("device offline".to_string()))
    );
}

#[test]
fn test_trait_object_entropy_source() {
    let mut source: Box<dyn EntropySource> = Box::new(FixedEntropy(vec![3; 32]));
    let rng = Generator::from_entropy(source.as_mut()).unwrap();
    assert_eq!(rng.state(), [0x0303_0303_0303_0303; 4]);
}

#[test]
fn test_auto_seed() {
    let mut rng = Generator::new_auto().expect("OS entropy should be available");
    assert_ne!(rng.state(), [0; 4]);
    rng.next_u64();
}

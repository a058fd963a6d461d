//! RNG Determinism Tests
//!
//! Same seed → same sequence. These tests pin the exact output of the
//! xoshiro256+ transition and the SplitMix64 seed expansion so any change
//! to the shift/rotate constants or the mixing step is caught.

use xoshiro_prng::{Generator, GeneratorState};

// ============================================================================
// Test Helpers
// ============================================================================

/// Generator over the textbook state [1, 2, 3, 4]
fn known_generator() -> Generator {
    Generator::from_words([1, 2, 3, 4]).expect("non-zero words are a valid seed")
}

// ============================================================================
// Known-Answer Tests
// ============================================================================

#[test]
fn test_first_output_for_words_1_2_3_4() {
    let mut rng = known_generator();
    // s0 + s3 = 1 + 4
    assert_eq!(rng.next_u64(), 5);
}

#[test]
fn test_first_three_outputs_for_words_1_2_3_4() {
    let mut rng = known_generator();
    let outputs: Vec<u64> = (0..3).map(|_| rng.next_u64()).collect();
    assert_eq!(outputs, vec![5, 211_106_232_532_999, 211_106_635_186_183]);
}

#[test]
fn test_state_after_three_steps() {
    let mut rng = known_generator();
    for _ in 0..3 {
        rng.next_u64();
    }
    assert_eq!(
        rng.state(),
        [
            211_106_635_448_322,
            211_106_232_532_999,
            211_140_593_188_866,
            9_223_547_958_715_220_736,
        ]
    );
}

#[test]
fn test_seed_42_first_outputs() {
    let mut rng = Generator::new(42);
    assert_eq!(rng.next_u64(), 0x15f4_1425_3e36_5229);
    assert_eq!(rng.next_u64(), 0x4f77_1f08_f421_1387);
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_same_words_same_sequence_10k_draws() {
    let words = [
        0x0123_4567_89ab_cdef,
        0xfedc_ba98_7654_3210,
        0x0f0f_0f0f_f0f0_f0f0,
        0x1111_2222_3333_4444,
    ];
    let mut a = Generator::from_words(words).unwrap();
    let mut b = Generator::from_words(words).unwrap();

    for i in 0..10_000 {
        assert_eq!(a.next_u64(), b.next_u64(), "sequences diverged at draw {}", i);
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = Generator::new(12345);
    let mut b = Generator::new(12345);

    for _ in 0..1000 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let mut a = Generator::new(12345);
    let mut b = Generator::new(12346);

    let seq_a: Vec<u64> = a.words().take(16).collect();
    let seq_b: Vec<u64> = b.words().take(16).collect();
    assert_ne!(seq_a, seq_b);
}

#[test]
fn test_clone_continues_identically() {
    let mut original = Generator::new(7);
    for _ in 0..100 {
        original.next_u64();
    }

    let mut copy = original.clone();
    for _ in 0..100 {
        assert_eq!(original.next_u64(), copy.next_u64());
    }
}

#[test]
fn test_derived_operations_deterministic() {
    let mut a = Generator::new(99_999);
    let mut b = Generator::new(99_999);

    for _ in 0..100 {
        assert_eq!(a.random_float(), b.random_float());
        assert_eq!(a.random_int(-50, 50).unwrap(), b.random_int(-50, 50).unwrap());
        assert_eq!(a.random_bytes(13).unwrap(), b.random_bytes(13).unwrap());
    }
    assert_eq!(a.shuffle(&[1, 2, 3, 4, 5, 6]), b.shuffle(&[1, 2, 3, 4, 5, 6]));
}

// ============================================================================
// Non-Zero Invariant
// ============================================================================

#[test]
fn test_state_never_zero_after_many_steps() {
    let mut rng = Generator::from_words([0, 0, 1, 0]).unwrap();
    for _ in 0..100_000 {
        rng.next_u64();
        assert_ne!(rng.state(), [0; 4]);
    }
}

#[test]
fn test_state_never_zero_after_jumps() {
    let mut rng = Generator::from_words([1, 0, 0, 0]).unwrap();
    for _ in 0..8 {
        rng.jump();
        assert!(GeneratorState::from_words(rng.state()).is_ok());
        rng.long_jump();
        assert!(GeneratorState::from_words(rng.state()).is_ok());
    }
}

// ============================================================================
// Jump-Ahead Streams
// ============================================================================

#[test]
fn test_jump_known_answer() {
    let mut rng = known_generator();
    rng.jump();
    assert_eq!(
        rng.state(),
        [
            0x8c7a_1539_56b5_f3d1,
            0x701f_1a71_3401_d85e,
            0x6527_f66a_6546_9085,
            0x8386_b786_c440_8050,
        ]
    );
}

#[test]
fn test_long_jump_known_answer() {
    let mut rng = known_generator();
    rng.long_jump();
    assert_eq!(
        rng.state(),
        [
            0x096a_8eb7_1295_a400,
            0xdbf8_4991_e50f_4516,
            0x534e_e745_810d_2a0e,
            0x3165_5ca1_a221_5bf1,
        ]
    );
}

#[test]
fn test_split_children_produce_distinct_sequences() {
    let mut root = Generator::new(2024);
    let mut children = root.split(4);

    let firsts: Vec<Vec<u64>> = children
        .iter_mut()
        .map(|child| child.words().take(8).collect())
        .collect();

    for i in 0..firsts.len() {
        for j in (i + 1)..firsts.len() {
            assert_ne!(firsts[i], firsts[j], "streams {} and {} overlap", i, j);
        }
    }

    let root_first: Vec<u64> = root.words().take(8).collect();
    assert!(!firsts.contains(&root_first), "parent must move past every child");
}

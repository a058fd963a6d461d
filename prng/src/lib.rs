//! Xoshiro PRNG - seeded xoshiro256+ generator and derived samplers
//!
//! Fast, deterministic, non-cryptographic random numbers.
//!
//! # Architecture
//!
//! - **rng**: Generator state, the xoshiro256+ engine, seeding, bounded
//!   sampling and derived utilities (bytes, floats, element picks, shuffles)
//! - **config**: Serializable description of how to seed a generator
//!
//! # Critical Invariants
//!
//! 1. Generator state is never all-zero
//! 2. Same seed → same sequence (bit-exact across implementations)
//! 3. Bounded sampling carries no modulo bias
//!
//! Not suitable for cryptography: the state can be recovered from a few
//! observed outputs.

// Module declarations
pub mod config;
pub mod rng;

// Re-exports for convenience
pub use config::{GeneratorConfig, SeedSource};
pub use rng::{
    compute_checksum, splitmix64, EntropySource, Generator, GeneratorSnapshot, GeneratorState,
    OsEntropy, RngError, SampleInt, ENTROPY_LEN,
};

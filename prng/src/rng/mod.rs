//! Deterministic random number generation
//!
//! Uses the xoshiro256+ algorithm: 256 bits of state, one output per
//! step formed by adding two state words.
//! CRITICAL: The transition, seed expansion and byte layout are bit-exact
//! contracts. Same seed → same sequence, on every platform.

mod entropy;
mod error;
mod generator;
mod interop;
mod sampling;
mod seed;
mod snapshot;
mod state;
mod utilities;
mod xoshiro;

pub use entropy::{EntropySource, OsEntropy};
pub use error::RngError;
pub use generator::Generator;
pub use sampling::SampleInt;
pub use seed::{splitmix64, ENTROPY_LEN};
pub use snapshot::{compute_checksum, GeneratorSnapshot};
pub use state::GeneratorState;

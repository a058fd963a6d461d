//! Snapshot - Save/Load Generator State
//!
//! Enables pause/resume of a generator's sequence across processes.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator continues the exact sequence
//!   of the generator the snapshot was taken from
//! - **Integrity**: The checksum must match the state and draw counter
//! - **Non-zero state**: An all-zero state is rejected on restore

use super::error::RngError;
use super::generator::Generator;
use super::state::GeneratorState;
use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Serializable generator checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// State words at snapshot time
    pub state: [u64; 4],

    /// Words drawn before the snapshot
    pub draws: u64,

    /// SHA256 of the canonical JSON of `state` and `draws`
    pub checksum: String,
}

// Field order is fixed by the struct, so serde_json output is canonical.
#[derive(Serialize)]
struct ChecksumInput<'a> {
    state: &'a [u64; 4],
    draws: u64,
}

/// Compute the hex SHA256 checksum for a state/draws pair
pub fn compute_checksum(state: &[u64; 4], draws: u64) -> Result<String, RngError> {
    let json = serde_json::to_string(&ChecksumInput { state, draws })
        .map_err(|e| RngError::Serialization(format!("Checksum input serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

impl GeneratorSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, RngError> {
        serde_json::to_string(self)
            .map_err(|e| RngError::Serialization(format!("Snapshot serialization failed: {}", e)))
    }

    /// Parse from a JSON string
    ///
    /// Only the shape is checked here; [`Generator::restore`] validates
    /// the checksum and state.
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        serde_json::from_str(json)
            .map_err(|e| RngError::Serialization(format!("Snapshot deserialization failed: {}", e)))
    }
}

impl Generator {
    /// Capture the current state for later [`Generator::restore`]
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::Generator;
    ///
    /// let mut rng = Generator::new(42);
    /// rng.next_u64();
    ///
    /// let snapshot = rng.snapshot().unwrap();
    /// let mut resumed = Generator::restore(&snapshot).unwrap();
    /// assert_eq!(rng.next_u64(), resumed.next_u64());
    /// ```
    pub fn snapshot(&self) -> Result<GeneratorSnapshot, RngError> {
        let state = self.state();
        let draws = self.draws();
        Ok(GeneratorSnapshot {
            state,
            draws,
            checksum: compute_checksum(&state, draws)?,
        })
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// [`RngError::CorruptSnapshot`] if the checksum does not match or the
    /// state is all-zero.
    pub fn restore(snapshot: &GeneratorSnapshot) -> Result<Self, RngError> {
        let expected = compute_checksum(&snapshot.state, snapshot.draws)?;
        if expected != snapshot.checksum {
            warn!(
                "Snapshot checksum mismatch: expected {}, found {}",
                expected, snapshot.checksum
            );
            return Err(RngError::CorruptSnapshot(format!(
                "checksum mismatch: expected {}, found {}",
                expected, snapshot.checksum
            )));
        }

        let state = GeneratorState::from_words(snapshot.state).map_err(|_| {
            warn!("Snapshot holds an all-zero state");
            RngError::CorruptSnapshot("all-zero state".to_string())
        })?;

        Ok(Generator::from_state(state).with_draws(snapshot.draws))
    }
}

// Generator configuration
//
// JSON description of how a generator is seeded and which sub-stream it
// runs on. All types deserialize with validation deferred to
// `Generator::from_config`, which reports errors as `RngError`.

use crate::rng::{EntropySource, Generator, OsEntropy, RngError};
use log::debug;
use serde::{Deserialize, Serialize};

// ============================================================================
// SEED SOURCE
// ============================================================================

/// Where the initial state comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SeedSource {
    /// Single 64-bit seed, expanded with SplitMix64
    Seed { value: u64 },

    /// Four explicit state words (must not all be zero)
    Words { words: [u64; 4] },

    /// 32 bytes from the entropy collaborator
    #[default]
    Entropy,
}

// ============================================================================
// GENERATOR CONFIG
// ============================================================================

/// Complete generator configuration
///
/// # Example
/// ```
/// use xoshiro_prng::{Generator, GeneratorConfig};
///
/// let config = GeneratorConfig::from_json(
///     r#"{"seed": {"type": "seed", "value": 42}, "stream": 1}"#,
/// ).unwrap();
///
/// let mut a = Generator::from_config(&config).unwrap();
/// let mut b = Generator::new(42);
/// b.jump();
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seed material
    #[serde(default)]
    pub seed: SeedSource,

    /// Number of jumps applied after seeding (independent sub-stream index)
    #[serde(default)]
    pub stream: u32,
}

impl GeneratorConfig {
    /// Config for a fixed 64-bit seed on stream 0
    pub fn seeded(value: u64) -> Self {
        Self {
            seed: SeedSource::Seed { value },
            stream: 0,
        }
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        serde_json::from_str(json)
            .map_err(|e| RngError::Serialization(format!("Config deserialization failed: {}", e)))
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String, RngError> {
        serde_json::to_string(self)
            .map_err(|e| RngError::Serialization(format!("Config serialization failed: {}", e)))
    }
}

impl Generator {
    /// Build a generator from a config, using OS entropy when asked
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, RngError> {
        Self::from_config_with(config, &mut OsEntropy)
    }

    /// Build a generator from a config with a caller-supplied entropy source
    ///
    /// The source is only consulted for [`SeedSource::Entropy`].
    pub fn from_config_with<E: EntropySource + ?Sized>(
        config: &GeneratorConfig,
        entropy: &mut E,
    ) -> Result<Self, RngError> {
        let mut generator = match &config.seed {
            SeedSource::Seed { value } => Generator::new(*value),
            SeedSource::Words { words } => Generator::from_words(*words)?,
            SeedSource::Entropy => Generator::from_entropy(entropy)?,
        };

        if config.stream > 0 {
            debug!("Advancing generator to stream {}", config.stream);
        }
        for _ in 0..config.stream {
            generator.jump();
        }
        Ok(generator)
    }
}

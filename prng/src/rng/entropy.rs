//! Entropy collaborator seam
//!
//! Acquiring secure random bytes is platform work this crate does not
//! own. [`EntropySource`] is the boundary: a generator asks it for
//! [`ENTROPY_LEN`](super::seed::ENTROPY_LEN) bytes exactly once, at
//! construction, and never again.

use super::error::RngError;
use rand_core::{OsRng, RngCore};

/// Provider of raw random bytes for auto-seeding
///
/// Implementations may return fewer or more bytes than requested; the
/// generator validates the length and fails with
/// [`RngError::InsufficientEntropy`] instead of padding or truncating.
///
/// Any `FnMut(usize) -> Result<Vec<u8>, RngError>` is an entropy source,
/// which keeps tests and embedders free of wrapper types.
pub trait EntropySource {
    /// Produce `len` random bytes
    fn entropy_bytes(&mut self, len: usize) -> Result<Vec<u8>, RngError>;
}

impl<F> EntropySource for F
where
    F: FnMut(usize) -> Result<Vec<u8>, RngError>,
{
    fn entropy_bytes(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
        self(len)
    }
}

/// Operating-system entropy via `getrandom`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn entropy_bytes(&mut self, len: usize) -> Result<Vec<u8>, RngError> {
        let mut buf = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| RngError::EntropyUnavailable(e.to_string()))?;
        Ok(buf)
    }
}

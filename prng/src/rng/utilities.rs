//! Utilities derived from raw draws: bytes, floats, element picks, shuffles
//!
//! # Byte Layout
//!
//! Bytes are produced by serializing each 64-bit draw as 8 little-endian
//! bytes and truncating the final chunk. `random_bytes(12)` therefore
//! consumes two draws and returns all of the first and the low half of
//! the second. Other implementations compare against this layout.

use super::error::RngError;
use super::generator::Generator;

/// 2^-53, the spacing of the float grid produced by `random_float`
const FLOAT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

impl Generator {
    /// Generate exactly `n` random bytes
    ///
    /// # Errors
    /// [`RngError::InvalidLength`] if `n` is zero.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::Generator;
    ///
    /// let mut rng = Generator::from_words([1, 2, 3, 4]).unwrap();
    /// let bytes = rng.random_bytes(10).unwrap();
    /// assert_eq!(bytes, vec![5, 0, 0, 0, 0, 0, 0, 0, 7, 0]);
    /// ```
    pub fn random_bytes(&mut self, n: usize) -> Result<Vec<u8>, RngError> {
        if n == 0 {
            return Err(RngError::InvalidLength);
        }
        let mut out = vec![0u8; n];
        self.fill_bytes(&mut out);
        Ok(out)
    }

    /// Fill `dest` with random bytes using the `random_bytes` layout
    ///
    /// An empty slice is left alone and consumes no draws.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    /// Generate a random f64 in `[0.0, 1.0)`
    ///
    /// Keeps the top 53 bits of one draw, matching the mantissa width of
    /// an f64, and scales by 2^-53. The largest possible value is
    /// `1 - 2^-53`; 1.0 itself is never returned.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::Generator;
    ///
    /// let mut rng = Generator::new(12345);
    /// let probability = rng.random_float();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn random_float(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * FLOAT_SCALE
    }

    /// Pick one element uniformly, or `None` for an empty slice
    ///
    /// The slice is not modified. An empty slice consumes no draws.
    pub fn random_elem<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.bounded_u64(items.len() as u64) as usize;
        items.get(index)
    }

    /// Return a uniformly shuffled copy of `items`
    ///
    /// The input is left untouched.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::Generator;
    ///
    /// let mut rng = Generator::new(2024);
    /// let deck: Vec<u32> = (0..52).collect();
    /// let mut shuffled = rng.shuffle(&deck);
    /// assert_eq!(deck, (0..52).collect::<Vec<_>>());
    ///
    /// shuffled.sort_unstable();
    /// assert_eq!(shuffled, deck);
    /// ```
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle_in_place(&mut out);
        out
    }

    /// Fisher-Yates shuffle of `items` in place
    ///
    /// Walks from the last index down to 1, swapping position `i` with a
    /// position drawn uniformly from `[0, i]`.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            // same draw as random_int(0, i)
            let j = self.bounded_u64(i as u64 + 1) as usize;
            if i != j {
                items.swap(i, j);
            }
        }
    }
}

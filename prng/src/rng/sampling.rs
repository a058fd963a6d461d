//! Unbiased bounded integers
//!
//! # Algorithm
//!
//! For an inclusive range `[min, max]` the span `max - min + 1` is
//! computed in wrapping `u64` arithmetic, where a span of 0 stands for
//! the full 2^64 range. Raw words are drawn and any word falling in the
//! tail above the largest multiple of `span` that fits in 64 bits is
//! rejected. The accepted word is reduced modulo `span` and added to
//! `min`.
//!
//! The tail holds `2^64 mod span` values, always fewer than half of all
//! words, so the expected number of draws is below 2.

use super::error::RngError;
use super::generator::Generator;

const SIGN_BIT: u64 = 1 << 63;

/// Primitive integer types accepted by [`Generator::random_int`]
///
/// Each value maps to a `u64` offset with the same ordering, so one
/// sampler covers signed and unsigned types alike.
pub trait SampleInt: Copy + PartialOrd {
    /// Order-preserving map into `u64`
    fn to_offset(self) -> u64;

    /// Inverse of [`SampleInt::to_offset`] for offsets in range
    fn from_offset(offset: u64) -> Self;

    /// Lossless widening, used for error reporting
    fn to_i128(self) -> i128;
}

macro_rules! impl_sample_unsigned {
    ($($t:ty),*) => {$(
        impl SampleInt for $t {
            #[inline]
            fn to_offset(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_offset(offset: u64) -> Self {
                offset as $t
            }

            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

// Signed values are sign-extended to i64, then the sign bit is flipped so
// i64::MIN maps to 0 and i64::MAX maps to u64::MAX.
macro_rules! impl_sample_signed {
    ($($t:ty),*) => {$(
        impl SampleInt for $t {
            #[inline]
            fn to_offset(self) -> u64 {
                (self as i64 as u64) ^ SIGN_BIT
            }

            #[inline]
            fn from_offset(offset: u64) -> Self {
                (offset ^ SIGN_BIT) as i64 as $t
            }

            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_sample_unsigned!(u8, u16, u32, u64, usize);
impl_sample_signed!(i8, i16, i32, i64, isize);

impl Generator {
    /// Generate an integer uniformly distributed over `[min, max]`
    ///
    /// Both bounds are inclusive. The result carries no modulo bias for
    /// any range width, including the full range of the type.
    ///
    /// # Errors
    /// [`RngError::InvalidRange`] if `min > max`. No state is consumed.
    ///
    /// # Example
    /// ```
    /// use xoshiro_prng::{Generator, RngError};
    ///
    /// let mut rng = Generator::new(12345);
    /// let amount: i64 = rng.random_int(10_000, 100_000).unwrap();
    /// assert!((10_000..=100_000).contains(&amount));
    ///
    /// assert_eq!(
    ///     rng.random_int(5u8, 4u8),
    ///     Err(RngError::InvalidRange { min: 5, max: 4 })
    /// );
    /// ```
    pub fn random_int<T: SampleInt>(&mut self, min: T, max: T) -> Result<T, RngError> {
        if min > max {
            return Err(RngError::InvalidRange {
                min: min.to_i128(),
                max: max.to_i128(),
            });
        }

        let low = min.to_offset();
        let span = max.to_offset().wrapping_sub(low).wrapping_add(1);
        let offset = self.bounded_u64(span);
        Ok(T::from_offset(low.wrapping_add(offset)))
    }

    /// Uniform value in `[0, span)`; a span of 0 means the full 2^64 range
    pub(crate) fn bounded_u64(&mut self, span: u64) -> u64 {
        if span == 0 {
            return self.next_u64();
        }

        // 2^64 mod span
        let tail = span.wrapping_neg() % span;
        let limit = u64::MAX - tail;
        loop {
            let x = self.next_u64();
            if x <= limit {
                return x % span;
            }
        }
    }
}

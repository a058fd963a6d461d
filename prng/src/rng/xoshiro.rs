//! xoshiro256+ transition and jump-ahead
//!
//! # Algorithm
//!
//! Output is the wrapping sum `s0 + s3`. The state then advances with a
//! fixed sequence of xors, one left shift by 17 and one left rotation by
//! 45. The upper bits of the output are of better quality than the
//! lowest ones; downstream code (float conversion, `next_u32`) prefers
//! the high bits.
//!
//! The shift/rotate constants and the jump polynomials are part of the
//! output contract. Changing any of them silently changes every sequence
//! produced for a given seed.

use super::state::GeneratorState;

/// Advances the state by 2^128 steps
const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

/// Advances the state by 2^192 steps
const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

impl GeneratorState {
    /// One xoshiro256+ step: returns the output and mutates the state
    #[inline]
    pub(crate) fn step(&mut self) -> u64 {
        let s = &mut self.s;
        let result = s[0].wrapping_add(s[3]);

        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);

        result
    }

    pub(crate) fn jump(&mut self) {
        self.apply_polynomial(&JUMP);
    }

    pub(crate) fn long_jump(&mut self) {
        self.apply_polynomial(&LONG_JUMP);
    }

    // The accumulator is only written back after all 256 steps.
    fn apply_polynomial(&mut self, table: &[u64; 4]) {
        let mut acc = [0u64; 4];
        for &word in table {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s.iter()) {
                        *a ^= *s;
                    }
                }
                self.step();
            }
        }
        self.s = acc;
    }
}

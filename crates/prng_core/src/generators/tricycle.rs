//! Three-word reversible generator.
//!
//! [`TricycleGenerator`] keeps three 64-bit words `(a, b, c)` and advances
//! them with a step built only from invertible pieces:
//!
//! ```text
//! a' = M * c
//! b' = a ^ b ^ c
//! c' = rotl(b, 41) + K
//! output = a
//! ```
//!
//! `M` is odd, so multiplication by `M` is undone by its inverse modulo
//! 2^64; the rotation is undone by the opposite rotation and the addition by
//! subtraction. Recovering `c`, then `b`, then `a` (from the xor) inverts the
//! whole step, which is what [`Generator::previous_u64`] does.
//!
//! There is no closed-form jump for this transition, so `skip` is refused.

use rand::Rng;

use super::traits::Generator;
use crate::math::{mod_inverse, seed_word};
use crate::types::Result;

const MULTIPLIER: u64 = 0xD134_2543_DE82_EF95;
const MULTIPLIER_INVERSE: u64 = mod_inverse(MULTIPLIER);
const INCREMENT: u64 = 0xC6BC_2796_92B5_C323;
const ROTATION: u32 = 41;

/// Reversible three-word generator, tag `TriR`.
///
/// Supports backward stepping but not jump-ahead. All `2^192` states are
/// legal, including all zeros.
///
/// # Examples
///
/// ```
/// use prng_core::generators::{Generator, TricycleGenerator};
///
/// let mut rng = TricycleGenerator::new(42);
/// let before = rng.clone();
/// let value = rng.next_u64();
/// assert_eq!(rng.previous_u64().unwrap(), value);
/// assert_eq!(rng, before);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TricycleGenerator {
    state_a: u64,
    state_b: u64,
    state_c: u64,
}

impl TricycleGenerator {
    /// Serialisation and registry tag.
    pub const TAG: &'static str = "TriR";

    /// Number of state words.
    pub const STATE_COUNT: usize = 3;

    /// Creates a generator whose words are derived from `seed` by the
    /// Bit-Mixer.
    #[inline]
    pub fn new(seed: u64) -> Self {
        let mut generator = Self::with_state(0, 0, 0);
        generator.seed(seed);
        generator
    }

    /// Creates a generator seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Creates a generator with verbatim state words.
    #[inline]
    pub fn with_state(state_a: u64, state_b: u64, state_c: u64) -> Self {
        Self {
            state_a,
            state_b,
            state_c,
        }
    }

    /// First state word; also the next output.
    #[inline]
    pub fn state_a(&self) -> u64 {
        self.state_a
    }

    /// Second state word.
    #[inline]
    pub fn state_b(&self) -> u64 {
        self.state_b
    }

    /// Third state word.
    #[inline]
    pub fn state_c(&self) -> u64 {
        self.state_c
    }
}

impl Generator for TricycleGenerator {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn state_count(&self) -> usize {
        Self::STATE_COUNT
    }

    fn supports_skip(&self) -> bool {
        false
    }

    fn supports_previous(&self) -> bool {
        true
    }

    fn select_state(&self, index: usize) -> u64 {
        match index {
            0 => self.state_a,
            1 => self.state_b,
            _ => self.state_c,
        }
    }

    fn set_selected_state(&mut self, index: usize, value: u64) {
        match index {
            0 => self.state_a = value,
            1 => self.state_b = value,
            _ => self.state_c = value,
        }
    }

    fn seed(&mut self, seed: u64) {
        tracing::trace!(tag = Self::TAG, seed, "seeding generator");
        self.state_a = seed_word(seed, 0);
        self.state_b = seed_word(seed, 1);
        self.state_c = seed_word(seed, 2);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let (fa, fb, fc) = (self.state_a, self.state_b, self.state_c);
        self.state_a = MULTIPLIER.wrapping_mul(fc);
        self.state_b = fa ^ fb ^ fc;
        self.state_c = fb.rotate_left(ROTATION).wrapping_add(INCREMENT);
        fa
    }

    fn previous_u64(&mut self) -> Result<u64> {
        let fc = self.state_a.wrapping_mul(MULTIPLIER_INVERSE);
        let fb = self.state_c.wrapping_sub(INCREMENT).rotate_right(ROTATION);
        let fa = self.state_b ^ fb ^ fc;
        self.state_a = fa;
        self.state_b = fb;
        self.state_c = fc;
        Ok(fa)
    }

    fn copy(&self) -> Box<dyn Generator> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_inverse() {
        assert_eq!(MULTIPLIER.wrapping_mul(MULTIPLIER_INVERSE), 1);
        assert_eq!(MULTIPLIER_INVERSE, 0x572B_5EE7_7A54_E3BD);
    }

    #[test]
    fn test_seeded_state() {
        let rng = TricycleGenerator::new(42);
        assert_eq!(rng.state_a(), 0xBDD7_3226_2FEB_6E95);
        assert_eq!(rng.state_b(), 0x28EF_E333_B266_F103);
        assert_eq!(rng.state_c(), 0x4752_6757_130F_9F52);
    }

    #[test]
    fn test_known_outputs() {
        let mut rng = TricycleGenerator::new(42);
        assert_eq!(rng.next_u64(), 0xBDD7_3226_2FEB_6E95);
        assert_eq!(rng.next_u64(), 0xFBF5_3707_B179_48BA);
        assert_eq!(rng.next_u64(), 0xD34F_2F70_3886_C993);
    }

    #[test]
    fn test_all_zero_state_is_legal() {
        let mut rng = TricycleGenerator::with_state(0, 0, 0);
        assert_eq!(rng.next_u64(), 0);
        assert_eq!(rng.state_c(), INCREMENT);
        assert_eq!(rng.previous_u64().unwrap(), 0);
        assert_eq!(rng, TricycleGenerator::with_state(0, 0, 0));
    }

    #[test]
    fn test_previous_walks_back_many_steps() {
        let start = TricycleGenerator::new(7);
        let mut rng = start.clone();
        let forward: Vec<u64> = (0..64).map(|_| rng.next_u64()).collect();
        for &expected in forward.iter().rev() {
            assert_eq!(rng.previous_u64().unwrap(), expected);
        }
        assert_eq!(rng, start);
    }

    #[test]
    fn test_skip_is_refused() {
        let mut rng = TricycleGenerator::new(1);
        let before = rng.clone();
        let err = rng.skip(10).unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(rng, before);
    }
}

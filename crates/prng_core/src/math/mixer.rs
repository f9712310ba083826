//! Bit-Mixer: a bijective 64-bit avalanche function.
//!
//! Generators with several state words derive each word from a single seed by
//! feeding `seed`, `seed + γ`, `seed + 2γ`, ... independently through [`mix`].
//! Because [`mix`] is a bijection on `u64`, the first derived word is an
//! injective function of the seed: distinct seeds never share a first word.

/// Odd additive constant (2^64 / φ) applied before mixing and used as the
/// stride between successive seed words.
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

const MIX_MULTIPLIER_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_MULTIPLIER_2: u64 = 0x94D0_49BB_1331_11EB;

/// Maps one word to a well-distributed word.
///
/// Additive constant, then two xor-shift/multiply rounds and a final
/// xor-shift. Every stage is invertible, so the whole function is a
/// bijection.
///
/// # Examples
///
/// ```
/// use prng_core::math::mix;
///
/// assert_eq!(mix(0), 0xE220_A839_7B1D_CDAF);
/// assert_ne!(mix(1), mix(2));
/// ```
#[inline]
pub const fn mix(word: u64) -> u64 {
    let mut x = word.wrapping_add(GOLDEN_GAMMA);
    x = (x ^ (x >> 30)).wrapping_mul(MIX_MULTIPLIER_1);
    x = (x ^ (x >> 27)).wrapping_mul(MIX_MULTIPLIER_2);
    x ^ (x >> 31)
}

/// Derives state word `index` from `seed`.
///
/// Word `i` is `mix(seed + i * GOLDEN_GAMMA)`; no other input is consulted.
#[inline]
pub const fn seed_word(seed: u64, index: usize) -> u64 {
    mix(seed.wrapping_add(GOLDEN_GAMMA.wrapping_mul(index as u64)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mix_known_values() {
        // First outputs of the SplitMix64 sequence for seed 0 and 42.
        assert_eq!(mix(0), 0xE220_A839_7B1D_CDAF);
        assert_eq!(mix(42), 0xBDD7_3226_2FEB_6E95);
    }

    #[test]
    fn test_seed_word_strides_by_gamma() {
        assert_eq!(seed_word(42, 0), mix(42));
        assert_eq!(seed_word(42, 1), 0x28EF_E333_B266_F103);
        assert_eq!(seed_word(42, 2), 0x4752_6757_130F_9F52);
    }

    #[test]
    fn test_mix_is_const_evaluable() {
        const MIXED: u64 = mix(7);
        assert_eq!(MIXED, mix(7));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Distinct seeds give distinct first words.
        #[test]
        fn prop_first_word_injective(s1 in any::<u64>(), s2 in any::<u64>()) {
            prop_assume!(s1 != s2);
            prop_assert_ne!(seed_word(s1, 0), seed_word(s2, 0));
        }

        #[test]
        fn prop_seed_word_deterministic(seed in any::<u64>(), index in 0usize..8) {
            prop_assert_eq!(seed_word(seed, index), seed_word(seed, index));
        }
    }
}

//! Multiplicative inverses modulo 2^64.

/// Returns the inverse of odd `a` modulo 2^64, so that
/// `a.wrapping_mul(mod_inverse(a)) == 1`.
///
/// Newton iteration `x <- x * (2 - a * x)` doubles the number of correct low
/// bits each round. Any odd `a` is its own inverse modulo 8, so five rounds
/// take 3 bits to 96 and cover the full word.
///
/// For even `a` no inverse exists and the result is meaningless; callers
/// only pass odd multipliers.
///
/// # Examples
///
/// ```
/// use prng_core::math::mod_inverse;
///
/// const M: u64 = 0xD134_2543_DE82_EF95;
/// assert_eq!(M.wrapping_mul(mod_inverse(M)), 1);
/// ```
#[inline]
pub const fn mod_inverse(a: u64) -> u64 {
    let mut x = a;
    let mut round = 0;
    while round < 5 {
        x = x.wrapping_mul(2u64.wrapping_sub(a.wrapping_mul(x)));
        round += 1;
    }
    x
}

//! Type-generic bounded integer draws.
//!
//! The [`Generator`] trait exposes bounded draws for `i32`, `u32`, `i64` and
//! `u64`. These helpers extend the same conventions to every primitive
//! integer of at most 64 bits through `num_traits::PrimInt`.

use num_traits::PrimInt;

use super::traits::Generator;

/// Draws from `[inner, outer)`, or `(outer, inner]` when `outer < inner`.
///
/// # Examples
///
/// ```
/// use prng_core::generators::{next_integer_between, DistinctGenerator};
///
/// let mut rng = DistinctGenerator::new(1);
/// let value: u8 = next_integer_between(&mut rng, 200u8, 250u8);
/// assert!((200..250).contains(&value));
///
/// let value: i16 = next_integer_between(&mut rng, 10i16, -10i16);
/// assert!(value > -10 && value <= 10);
/// ```
pub fn next_integer_between<T, G>(generator: &mut G, inner: T, outer: T) -> T
where
    T: PrimInt + Into<i128> + TryFrom<i128>,
    G: Generator + ?Sized,
{
    let low: i128 = inner.into();
    let high: i128 = outer.into();
    // Spans of 64-bit types top out at 2^64 - 1.
    let span = u64::try_from((high - low).unsigned_abs()).unwrap_or(u64::MAX);
    let offset = i128::from(generator.next_u64_below(span));
    let value = if high >= low { low + offset } else { low - offset };
    T::try_from(value).unwrap_or(inner)
}

/// Draws from `[0, bound)`, or `(bound, 0]` for negative bounds.
pub fn next_integer_below<T, G>(generator: &mut G, bound: T) -> T
where
    T: PrimInt + Into<i128> + TryFrom<i128>,
    G: Generator + ?Sized,
{
    next_integer_between(generator, T::zero(), bound)
}

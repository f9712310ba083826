//! The uniform-stream contract shared by every generator.
//!
//! Concrete generators implement a small set of required methods (state
//! access, one forward step, seeding) and inherit every derived view from
//! default methods: bounded integers, floats in several interval flavours,
//! bulk state assignment and text serialisation.
//!
//! ## Capabilities
//!
//! Backward stepping and jump-ahead are optional. Callers query
//! [`Generator::supports_previous`] and [`Generator::supports_skip`] before
//! relying on them; a generator without the capability refuses the call with
//! [`GeneratorError::UnsupportedOperation`] rather than emulating it.
//!
//! ## Bound conventions
//!
//! - Dual-bound forms draw from `[inner, outer)`. When `outer < inner` the
//!   bounds swap and exclusivity flips, giving `(outer, inner]`. Equal bounds
//!   return `inner`.
//! - Single-bound forms are `between(0, bound)`: `[0, bound)` for positive
//!   bounds, `(bound, 0]` for negative bounds and `0` for a zero bound.
//!
//! ## Thread safety
//!
//! Generators perform no internal locking. Sharing one instance across
//! threads requires external synchronisation; the usual pattern is one
//! generator per thread.

use std::fmt;

use super::codec;
use crate::types::{GeneratorError, Result};

/// 2^-53: scales a 53-bit integer into `[0, 1)`.
const F64_UNIT: f64 = 1.110_223_024_625_156_5e-16;

/// 2^-52: scales a 52-bit integer (plus one half) into `(0, 1)`.
const F64_HALF_STEP_UNIT: f64 = 2.220_446_049_250_313e-16;

/// 2^-24: scales a 24-bit integer into `[0, 1)`.
const F32_UNIT: f32 = 5.960_464_5e-8;

/// Deterministic, fixed-width integer state machine producing a uniform
/// stream of 64-bit words.
///
/// Every bit pattern is a legal state. Two generators of the same concrete
/// type are equal iff all of their state words are equal.
///
/// # Examples
///
/// ```
/// use prng_core::generators::{Generator, TricycleGenerator};
///
/// let mut rng = TricycleGenerator::new(42);
/// let value = rng.next_u64();
/// assert_eq!(rng.previous_u64().unwrap(), value);
///
/// let die = rng.next_i32_between(1, 7);
/// assert!((1..7).contains(&die));
/// ```
pub trait Generator: fmt::Debug + Send + Sync {
    // ------------------------------------------------------------------
    // Required
    // ------------------------------------------------------------------

    /// Short tag identifying the concrete type in serialised text.
    fn tag(&self) -> &'static str;

    /// Number of 64-bit words in the state.
    fn state_count(&self) -> usize;

    /// Whether [`Generator::skip`] is implemented.
    fn supports_skip(&self) -> bool;

    /// Whether [`Generator::previous_u64`] is implemented.
    fn supports_previous(&self) -> bool;

    /// Returns state word `index`.
    ///
    /// Indices at or beyond [`Generator::state_count`] select the last word.
    /// This is the expected recovery behaviour, not an error.
    fn select_state(&self, index: usize) -> u64;

    /// Replaces state word `index` verbatim.
    ///
    /// Indices at or beyond [`Generator::state_count`] write the last word.
    fn set_selected_state(&mut self, index: usize, value: u64);

    /// Reinitialises every state word from `seed`.
    ///
    /// Equivalent to constructing a fresh generator with the same seed.
    fn seed(&mut self, seed: u64);

    /// Advances by exactly one transition and returns the output word.
    fn next_u64(&mut self) -> u64;

    /// Independent copy with identical state and capabilities.
    fn copy(&self) -> Box<dyn Generator>;

    // ------------------------------------------------------------------
    // Optional capabilities
    // ------------------------------------------------------------------

    /// Whether state words can be read through [`Generator::select_state`].
    fn supports_read_access(&self) -> bool {
        true
    }

    /// Whether state words can be written through
    /// [`Generator::set_selected_state`] and [`Generator::set_state`].
    fn supports_write_access(&self) -> bool {
        true
    }

    /// Undoes the most recent [`Generator::next_u64`].
    ///
    /// Returns the value that call produced and leaves the state exactly as
    /// it was before it.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` unless [`Generator::supports_previous`].
    fn previous_u64(&mut self) -> Result<u64> {
        Err(GeneratorError::unsupported("previous", self.tag()))
    }

    /// Moves the state by `distance` steps without producing the
    /// intermediate outputs, then returns the output of the final step.
    ///
    /// Distances wrap modulo 2^64, so `distance.wrapping_neg()` rewinds.
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` unless [`Generator::supports_skip`].
    fn skip(&mut self, _distance: u64) -> Result<u64> {
        Err(GeneratorError::unsupported("skip", self.tag()))
    }

    // ------------------------------------------------------------------
    // State helpers
    // ------------------------------------------------------------------

    /// All state words in index order.
    fn state_words(&self) -> Vec<u64> {
        (0..self.state_count()).map(|i| self.select_state(i)).collect()
    }

    /// Assigns `values` to the state words cyclically: value 0 to word 0,
    /// value 1 to word 1, wrapping around when fewer values than words are
    /// given. An empty slice zeroes every word.
    fn set_state(&mut self, values: &[u64]) {
        for index in 0..self.state_count() {
            let value = if values.is_empty() {
                0
            } else {
                values[index % values.len()]
            };
            self.set_selected_state(index, value);
        }
    }

    /// Encodes the full state as `` #TAG`hex~hex~...` ``.
    fn serialize(&self) -> String {
        codec::encode(self.tag(), self.state_words())
    }

    /// Replaces the state with the words encoded in `text`.
    ///
    /// The state is untouched unless the whole text decodes.
    ///
    /// # Errors
    ///
    /// `MalformedState` if the text is not well formed, carries another tag,
    /// or has a word count different from [`Generator::state_count`].
    fn deserialize_in_place(&mut self, text: &str) -> Result<()> {
        if !self.supports_write_access() {
            return Err(GeneratorError::unsupported("deserialize", self.tag()));
        }
        let words = codec::decode_for(text, self.tag(), self.state_count())?;
        for (index, word) in words.into_iter().enumerate() {
            self.set_selected_state(index, word);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Integer views
    // ------------------------------------------------------------------

    /// Upper 32 bits of one output.
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Upper `bits` bits of one output (`bits` is capped at 64).
    fn next_bits(&mut self, bits: u32) -> u64 {
        let word = self.next_u64();
        match bits.min(64) {
            0 => 0,
            n => word >> (64 - n),
        }
    }

    /// Sign bit of one output.
    fn next_bool(&mut self) -> bool {
        (self.next_u64() as i64) < 0
    }

    /// Unbiased value in `[0, bound)`; `0` when `bound` is zero.
    ///
    /// Lemire's widening multiply: the high word of `x * bound` is the
    /// result, and draws whose low word falls under `2^64 mod bound` are
    /// rejected.
    fn next_u64_below(&mut self, bound: u64) -> u64 {
        let mut product = u128::from(self.next_u64()) * u128::from(bound);
        if bound == 0 {
            return 0;
        }
        let mut low = product as u64;
        if low < bound {
            let threshold = bound.wrapping_neg() % bound;
            while low < threshold {
                product = u128::from(self.next_u64()) * u128::from(bound);
                low = product as u64;
            }
        }
        (product >> 64) as u64
    }

    /// Value in `[inner, outer)`, or `(outer, inner]` when `outer < inner`.
    fn next_u64_between(&mut self, inner: u64, outer: u64) -> u64 {
        if outer >= inner {
            inner + self.next_u64_below(outer - inner)
        } else {
            inner - self.next_u64_below(inner - outer)
        }
    }

    /// Value in `[0, bound)`; `(bound, 0]` for negative bounds.
    fn next_i64_below(&mut self, bound: i64) -> i64 {
        self.next_i64_between(0, bound)
    }

    /// Value in `[inner, outer)`, or `(outer, inner]` when `outer < inner`.
    fn next_i64_between(&mut self, inner: i64, outer: i64) -> i64 {
        if outer >= inner {
            let span = outer.wrapping_sub(inner) as u64;
            inner.wrapping_add(self.next_u64_below(span) as i64)
        } else {
            let span = inner.wrapping_sub(outer) as u64;
            inner.wrapping_sub(self.next_u64_below(span) as i64)
        }
    }

    /// Unbiased value in `[0, bound)`; `0` when `bound` is zero.
    fn next_u32_below(&mut self, bound: u32) -> u32 {
        self.next_u64_below(u64::from(bound)) as u32
    }

    /// Value in `[0, bound)`; `(bound, 0]` for negative bounds.
    fn next_i32_below(&mut self, bound: i32) -> i32 {
        self.next_i32_between(0, bound)
    }

    /// Value in `[inner, outer)`, or `(outer, inner]` when `outer < inner`.
    fn next_i32_between(&mut self, inner: i32, outer: i32) -> i32 {
        self.next_i64_between(i64::from(inner), i64::from(outer)) as i32
    }

    // ------------------------------------------------------------------
    // Floating-point views
    // ------------------------------------------------------------------

    /// Value in `[0, 1)` with 53 random bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }

    /// Value in `[0, outer)`, or `(outer, 0]` for negative `outer`.
    fn next_f64_below(&mut self, outer: f64) -> f64 {
        self.next_f64_between(0.0, outer)
    }

    /// Value in `[inner, outer)`, or `(outer, inner]` when `outer < inner`.
    ///
    /// Draws that round onto `outer` are rejected and redrawn. Equal bounds
    /// and non-finite spans return the unscaled draw without rejection.
    fn next_f64_between(&mut self, inner: f64, outer: f64) -> f64 {
        let span = outer - inner;
        if inner == outer || !span.is_finite() {
            return inner + self.next_f64() * span;
        }
        loop {
            let value = inner + self.next_f64() * span;
            if value != outer {
                return value;
            }
        }
    }

    /// Value in `[0, 1)` with 24 random bits.
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 * F32_UNIT
    }

    /// Value in `[0, 1]`; both endpoints are reachable.
    fn next_inclusive_f64(&mut self) -> f64 {
        self.next_u64_below((1u64 << 53) + 1) as f64 * F64_UNIT
    }

    /// Value in `(0, 1)`; neither endpoint is reachable.
    fn next_exclusive_f64(&mut self) -> f64 {
        ((self.next_u64() >> 12) as f64 + 0.5) * F64_HALF_STEP_UNIT
    }

    /// Value strictly between `inner` and `outer`, in either order.
    ///
    /// Draws that round onto either bound are rejected and redrawn. When no
    /// float lies strictly between the bounds (equal or adjacent bounds) the
    /// result is `inner`; non-finite spans are returned without rejection.
    fn next_exclusive_f64_between(&mut self, inner: f64, outer: f64) -> f64 {
        let span = outer - inner;
        if !span.is_finite() {
            return inner + self.next_exclusive_f64() * span;
        }
        let midpoint = inner + 0.5 * span;
        if midpoint == inner || midpoint == outer {
            self.next_u64();
            return inner;
        }
        loop {
            let value = inner + self.next_exclusive_f64() * span;
            if value != inner && value != outer {
                return value;
            }
        }
    }
}

impl PartialEq for dyn Generator {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag()
            && self.state_count() == other.state_count()
            && (0..self.state_count()).all(|i| self.select_state(i) == other.select_state(i))
    }
}

impl Eq for dyn Generator {}

impl Clone for Box<dyn Generator> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

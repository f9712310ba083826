//! Bridge from [`Generator`] to the `rand` ecosystem.
//!
//! [`RngAdapter`] borrows a generator and implements
//! [`rand_core::RngCore`], so any `rand`/`rand_distr` sampler can draw from
//! it. The generator's own stream is consumed; no state is duplicated.

use rand_core::{impls, Error, RngCore};

use super::traits::Generator;

/// Borrowing `RngCore` view of a generator.
///
/// # Examples
///
/// ```
/// use prng_core::generators::{RngAdapter, TricycleGenerator};
/// use rand::Rng;
///
/// let mut generator = TricycleGenerator::new(5);
/// let mut rng = RngAdapter::new(&mut generator);
/// let roll: u8 = rng.gen_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug)]
pub struct RngAdapter<'a, G: Generator + ?Sized> {
    generator: &'a mut G,
}

impl<'a, G: Generator + ?Sized> RngAdapter<'a, G> {
    /// Wraps `generator`.
    #[inline]
    pub fn new(generator: &'a mut G) -> Self {
        Self { generator }
    }

    /// Releases the borrowed generator.
    #[inline]
    pub fn into_inner(self) -> &'a mut G {
        self.generator
    }
}

impl<G: Generator + ?Sized> RngCore for RngAdapter<'_, G> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Generator::next_u32(self.generator)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Generator::next_u64(self.generator)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{DistinctGenerator, TricycleGenerator};

    #[test]
    fn test_adapter_shares_stream() {
        let mut direct = TricycleGenerator::new(8);
        let mut adapted = TricycleGenerator::new(8);
        let expected = Generator::next_u64(&mut direct);
        let actual = RngCore::next_u64(&mut RngAdapter::new(&mut adapted));
        assert_eq!(actual, expected);
        assert_eq!(adapted, direct);
    }

    #[test]
    fn test_adapter_over_trait_object() {
        let mut boxed: Box<dyn Generator> = Box::new(DistinctGenerator::new(2));
        let mut rng = RngAdapter::new(boxed.as_mut());
        let mut bytes = [0u8; 13];
        rng.fill_bytes(&mut bytes);
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_fill_bytes_is_little_endian_words() {
        let mut reference = DistinctGenerator::new(4);
        let word = Generator::next_u64(&mut reference);

        let mut generator = DistinctGenerator::new(4);
        let mut bytes = [0u8; 8];
        RngAdapter::new(&mut generator).fill_bytes(&mut bytes);
        assert_eq!(bytes, word.to_le_bytes());
    }
}

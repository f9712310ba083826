//! The parameter-tuple contract implemented by every distribution.

use std::fmt;

use prng_core::Generator;

use crate::error::Result;

/// A distribution's named parameters together with its standard algorithms.
///
/// Implementors are small `Copy` tuples. The standard validity predicate and
/// sampler defined here are what a [`Distribution`](crate::Distribution)
/// uses until a caller installs its own strategies. Statistics are computed
/// from the parameters alone.
pub trait DistributionParams: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable distribution name used in errors and logs.
    const NAME: &'static str;

    /// Standard joint validity predicate.
    fn is_valid(&self) -> bool;

    /// Standard sampling algorithm.
    fn sample(&self, generator: &mut dyn Generator) -> f64;

    /// Expected value.
    fn mean(&self) -> Result<f64>;

    /// 50th percentile.
    fn median(&self) -> Result<f64>;

    /// Location of the density maximum.
    fn mode(&self) -> Result<f64>;

    /// Second central moment.
    fn variance(&self) -> Result<f64>;

    /// Lower end of the support.
    fn minimum(&self) -> Result<f64>;

    /// Upper end of the support.
    fn maximum(&self) -> Result<f64>;
}

//! Kumaraswamy distribution on the unit interval.
//!
//! A Beta-like distribution whose CDF `1 - (1 - x^a)^b` inverts in closed
//! form, so sampling is a single inverse transform.

use prng_core::Generator;

use crate::distribution::Distribution;
use crate::error::{DistributionError, Result, Statistic};
use crate::params::DistributionParams;

/// Draws one Kumaraswamy(`a`, `b`) sample, consuming one generator step.
///
/// Results lie in `[0, 1]`; the endpoints are reached only through rounding
/// with extreme shapes.
#[inline]
pub fn sample_kumaraswamy(generator: &mut dyn Generator, a: f64, b: f64) -> f64 {
    let u = generator.next_exclusive_f64();
    (1.0 - (1.0 - u).powf(1.0 / b)).powf(1.0 / a)
}

/// Parameters of the Kumaraswamy distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KumaraswamyParams {
    /// First shape.
    pub a: f64,
    /// Second shape.
    pub b: f64,
}

impl KumaraswamyParams {
    /// Creates a parameter tuple without validating it.
    #[inline]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl DistributionParams for KumaraswamyParams {
    const NAME: &'static str = "Kumaraswamy";

    /// Both shapes finite and positive.
    fn is_valid(&self) -> bool {
        self.a.is_finite() && self.a > 0.0 && self.b.is_finite() && self.b > 0.0
    }

    fn sample(&self, generator: &mut dyn Generator) -> f64 {
        sample_kumaraswamy(generator, self.a, self.b)
    }

    fn mean(&self) -> Result<f64> {
        Err(DistributionError::not_implemented::<Self>(
            Statistic::Mean,
            "requires the Beta function",
        ))
    }

    /// `(1 - 2^(-1/b))^(1/a)`.
    fn median(&self) -> Result<f64> {
        Ok((1.0 - 2f64.powf(-1.0 / self.b)).powf(1.0 / self.a))
    }

    fn mode(&self) -> Result<f64> {
        Err(DistributionError::not_implemented::<Self>(
            Statistic::Mode,
            "not derived for the general case",
        ))
    }

    fn variance(&self) -> Result<f64> {
        Err(DistributionError::not_implemented::<Self>(
            Statistic::Variance,
            "requires the Beta function",
        ))
    }

    fn minimum(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64> {
        Ok(1.0)
    }
}

/// Kumaraswamy distribution bound to a generator.
pub type KumaraswamyDistribution<'a> = Distribution<'a, KumaraswamyParams>;

impl<'a> Distribution<'a, KumaraswamyParams> {
    /// Creates a Kumaraswamy distribution with shapes `a` and `b`.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` unless both are finite and positive.
    pub fn new(generator: &'a mut dyn Generator, a: f64, b: f64) -> Result<Self> {
        Self::from_params(generator, KumaraswamyParams::new(a, b))
    }

    /// First shape parameter.
    #[inline]
    pub fn a(&self) -> f64 {
        self.params().a
    }

    /// Second shape parameter.
    #[inline]
    pub fn b(&self) -> f64 {
        self.params().b
    }

    /// Replaces the first shape.
    pub fn set_a(&mut self, a: f64) -> Result<()> {
        self.set_params(KumaraswamyParams { a, ..*self.params() })
    }

    /// Replaces the second shape.
    pub fn set_b(&mut self, b: f64) -> Result<()> {
        self.set_params(KumaraswamyParams { b, ..*self.params() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use prng_core::{DistinctGenerator, TricycleGenerator};

    #[test]
    fn test_median_closed_form() {
        let median = KumaraswamyParams::new(2.0, 2.0).median().unwrap();
        assert_relative_eq!(median, 0.541_196_100_146_196_9, max_relative = 1e-14);
        // a = b = 1 is the uniform distribution.
        assert_relative_eq!(KumaraswamyParams::new(1.0, 1.0).median().unwrap(), 0.5);
    }

    #[test]
    fn test_uniform_case_reproduces_uniform_stream() {
        let mut source = DistinctGenerator::new(8);
        let mut reference = source.clone();
        for _ in 0..100 {
            let x = sample_kumaraswamy(&mut source, 1.0, 1.0);
            assert_abs_diff_eq!(x, reference.next_exclusive_f64(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_statistics_not_implemented() {
        let params = KumaraswamyParams::new(2.0, 5.0);
        for result in [params.mean(), params.mode(), params.variance()] {
            assert!(matches!(
                result,
                Err(DistributionError::StatisticNotImplemented { distribution: "Kumaraswamy", .. })
            ));
        }
        assert_eq!(params.minimum().unwrap(), 0.0);
        assert_eq!(params.maximum().unwrap(), 1.0);
    }

    #[test]
    fn test_named_setters() {
        let mut rng = TricycleGenerator::new(2);
        let mut dist = KumaraswamyDistribution::new(&mut rng, 2.0, 3.0).unwrap();
        dist.set_a(0.5).unwrap();
        assert_eq!((dist.a(), dist.b()), (0.5, 3.0));
        assert!(dist.set_b(-1.0).is_err());
        assert_eq!(dist.b(), 3.0);
    }
}

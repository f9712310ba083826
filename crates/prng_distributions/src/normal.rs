//! Normal (Gaussian) distribution sampled by inverse transform.
//!
//! Uniforms from the open interval (0, 1) are mapped through [`probit`], a
//! rational approximation of the inverse standard normal CDF followed by
//! one Newton refinement step. Each sample consumes exactly one generator
//! step, so a Normal stream can be rewound step for step.

use std::f64::consts::{PI, SQRT_2};

use prng_core::Generator;

use crate::distribution::Distribution;
use crate::error::Result;
use crate::params::DistributionParams;
use crate::special::erfc;

// Rational approximation coefficients for the central region.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

// Rational approximation coefficients for the tails.
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

const P_LOW: f64 = 0.024_25;
const P_HIGH: f64 = 1.0 - P_LOW;

#[inline]
fn tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

/// Inverse of the standard normal CDF.
///
/// Accurate to roughly `1e-14` relative error on `(0, 1)`. Returns
/// `-inf` for `p <= 0`, `+inf` for `p >= 1` and NaN for NaN.
///
/// # Examples
/// ```
/// use prng_distributions::probit;
/// use approx::assert_relative_eq;
///
/// assert_eq!(probit(0.5), 0.0);
/// assert_relative_eq!(probit(0.975), 1.959_963_984_540_054, max_relative = 1e-12);
/// assert_relative_eq!(probit(0.025), -1.959_963_984_540_054, max_relative = 1e-12);
/// ```
pub fn probit(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    let x = if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (-p).ln_1p()).sqrt())
    };

    // One Newton step on CDF(x) - p. The upper tail works with 1 - CDF to
    // avoid cancellation.
    let residual = if p > P_HIGH {
        (1.0 - p) - 0.5 * erfc(x / SQRT_2)
    } else {
        0.5 * erfc(-x / SQRT_2) - p
    };
    let step = residual * (2.0 * PI).sqrt() * (0.5 * x * x).exp();
    if step.is_finite() {
        x - step
    } else {
        x
    }
}

/// Draws one Normal(`mu`, `sigma`) sample, consuming one generator step.
#[inline]
pub fn sample_normal(generator: &mut dyn Generator, mu: f64, sigma: f64) -> f64 {
    mu + sigma * probit(generator.next_exclusive_f64())
}

/// Parameters of the Normal distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalParams {
    /// Mean.
    pub mu: f64,
    /// Standard deviation.
    pub sigma: f64,
}

impl NormalParams {
    /// Creates a parameter tuple without validating it.
    #[inline]
    pub const fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }
}

impl Default for NormalParams {
    /// The standard normal.
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl DistributionParams for NormalParams {
    const NAME: &'static str = "Normal";

    /// `mu` finite and `sigma` finite and positive.
    fn is_valid(&self) -> bool {
        self.mu.is_finite() && self.sigma.is_finite() && self.sigma > 0.0
    }

    fn sample(&self, generator: &mut dyn Generator) -> f64 {
        sample_normal(generator, self.mu, self.sigma)
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.mu)
    }

    fn median(&self) -> Result<f64> {
        Ok(self.mu)
    }

    fn mode(&self) -> Result<f64> {
        Ok(self.mu)
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.sigma * self.sigma)
    }

    fn minimum(&self) -> Result<f64> {
        Ok(f64::NEG_INFINITY)
    }

    fn maximum(&self) -> Result<f64> {
        Ok(f64::INFINITY)
    }
}

/// Normal distribution bound to a generator.
pub type NormalDistribution<'a> = Distribution<'a, NormalParams>;

impl<'a> Distribution<'a, NormalParams> {
    /// Creates a Normal distribution with mean `mu` and standard deviation
    /// `sigma`.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` unless `mu` is finite and `sigma` is finite and
    /// positive.
    ///
    /// # Examples
    /// ```
    /// use prng_core::TricycleGenerator;
    /// use prng_distributions::NormalDistribution;
    ///
    /// let mut rng = TricycleGenerator::new(7);
    /// let mut normal = NormalDistribution::new(&mut rng, 5.0, 2.0).unwrap();
    /// assert!(normal.next_f64().is_finite());
    /// assert!(NormalDistribution::new(&mut TricycleGenerator::new(7), 0.0, -1.0).is_err());
    /// ```
    pub fn new(generator: &'a mut dyn Generator, mu: f64, sigma: f64) -> Result<Self> {
        Self::from_params(generator, NormalParams::new(mu, sigma))
    }

    /// Mean parameter.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.params().mu
    }

    /// Standard deviation parameter.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.params().sigma
    }

    /// Replaces the mean, keeping the standard deviation.
    pub fn set_mu(&mut self, mu: f64) -> Result<()> {
        self.set_params(NormalParams { mu, ..*self.params() })
    }

    /// Replaces the standard deviation, keeping the mean.
    pub fn set_sigma(&mut self, sigma: f64) -> Result<()> {
        self.set_params(NormalParams { sigma, ..*self.params() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_core::{DistinctGenerator, TricycleGenerator};
    use proptest::prelude::*;

    #[test]
    fn test_probit_reference_values() {
        let cases = [
            (1e-10, -6.361_340_902_404_056),
            (0.001, -3.090_232_306_167_813),
            (0.024_25, -1.972_961_051_311_884_5),
            (0.1, -1.281_551_565_544_600_8),
            (0.3, -0.524_400_512_708_040_7),
            (0.841_344_746_068_542_9, 1.0),
            (0.999, 3.090_232_306_167_813),
        ];
        for (p, expected) in cases {
            assert_relative_eq!(probit(p), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_probit_edges() {
        assert_eq!(probit(0.5), 0.0);
        assert_eq!(probit(0.0), f64::NEG_INFINITY);
        assert_eq!(probit(-0.5), f64::NEG_INFINITY);
        assert_eq!(probit(1.0), f64::INFINITY);
        assert!(probit(f64::NAN).is_nan());
        assert!(probit(f64::MIN_POSITIVE).is_finite());
        assert!(probit(1.0 - f64::EPSILON / 2.0).is_finite());
    }

    #[test]
    fn test_sample_consumes_one_step() {
        let mut rng = DistinctGenerator::new(5);
        let start = rng.state();
        sample_normal(&mut rng, 0.0, 1.0);
        rng.previous_u64().unwrap();
        assert_eq!(rng.state(), start);
    }

    #[test]
    fn test_named_setters() {
        let mut rng = TricycleGenerator::new(1);
        let mut normal = NormalDistribution::new(&mut rng, 1.0, 2.0).unwrap();
        normal.set_mu(-3.0).unwrap();
        assert_eq!(normal.mu(), -3.0);
        assert_eq!(normal.sigma(), 2.0);

        assert!(normal.set_sigma(0.0).is_err());
        assert!(normal.set_mu(f64::NAN).is_err());
        assert_eq!(*normal.params(), NormalParams::new(-3.0, 2.0));
    }

    #[test]
    fn test_statistics() {
        let params = NormalParams::new(5.0, 2.0);
        assert_eq!(params.mean().unwrap(), 5.0);
        assert_eq!(params.median().unwrap(), 5.0);
        assert_eq!(params.mode().unwrap(), 5.0);
        assert_eq!(params.variance().unwrap(), 4.0);
        assert_eq!(params.minimum().unwrap(), f64::NEG_INFINITY);
        assert_eq!(params.maximum().unwrap(), f64::INFINITY);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_probit_antisymmetric(p in 1e-4f64..0.5) {
            prop_assert!((probit(p) + probit(1.0 - p)).abs() < 1e-9);
        }

        #[test]
        fn test_probit_monotonic(p in 1e-9f64..0.999, step in 1e-6f64..1e-3) {
            prop_assert!(probit(p) < probit(p + step));
        }
    }
}

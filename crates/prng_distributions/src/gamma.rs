//! Gamma distribution in the shape/rate parameterisation.
//!
//! Sampling uses the Marsaglia–Tsang squeeze method on Normal variates drawn
//! through [`sample_normal`]. Shapes below one are boosted by one and
//! corrected with an extra uniform power. The number of generator steps per
//! sample is not fixed.

use prng_core::Generator;

use crate::distribution::Distribution;
use crate::error::{DistributionError, Result, Statistic};
use crate::normal::sample_normal;
use crate::params::DistributionParams;

/// Draws one Gamma(`alpha`, `beta`) sample, with shape `alpha` and rate
/// `beta`.
///
/// The result is non-negative with mean `alpha / beta`.
pub fn sample_gamma(generator: &mut dyn Generator, alpha: f64, beta: f64) -> f64 {
    let boosted = alpha < 1.0;
    let shape = if boosted { alpha + 1.0 } else { alpha };
    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let (x, v) = loop {
            let x = sample_normal(generator, 0.0, 1.0);
            let v = 1.0 + c * x;
            if v > 0.0 {
                break (x, v * v * v);
            }
        };

        let u = generator.next_f64();
        let x2 = x * x;
        if u <= 1.0 - 0.331 * x2 * x2 || u.ln() <= 0.5 * x2 + d * (1.0 - v + v.ln()) {
            let value = d * v / beta;
            if boosted {
                return value * generator.next_exclusive_f64().powf(1.0 / alpha);
            }
            return value;
        }
    }
}

/// Parameters of the Gamma distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GammaParams {
    /// Shape.
    pub alpha: f64,
    /// Rate.
    pub beta: f64,
}

impl GammaParams {
    /// Creates a parameter tuple without validating it.
    #[inline]
    pub const fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }
}

impl DistributionParams for GammaParams {
    const NAME: &'static str = "Gamma";

    /// Both parameters finite and positive.
    fn is_valid(&self) -> bool {
        self.alpha.is_finite() && self.alpha > 0.0 && self.beta.is_finite() && self.beta > 0.0
    }

    fn sample(&self, generator: &mut dyn Generator) -> f64 {
        sample_gamma(generator, self.alpha, self.beta)
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.alpha / self.beta)
    }

    fn median(&self) -> Result<f64> {
        Err(DistributionError::not_implemented::<Self>(
            Statistic::Median,
            "no closed form",
        ))
    }

    fn mode(&self) -> Result<f64> {
        if self.alpha >= 1.0 {
            Ok((self.alpha - 1.0) / self.beta)
        } else {
            Err(DistributionError::unsupported::<Self>(
                Statistic::Mode,
                format!("density is unbounded at zero for alpha = {} < 1", self.alpha),
            ))
        }
    }

    fn variance(&self) -> Result<f64> {
        Ok(self.alpha / (self.beta * self.beta))
    }

    fn minimum(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64> {
        Ok(f64::INFINITY)
    }
}

/// Gamma distribution bound to a generator.
pub type GammaDistribution<'a> = Distribution<'a, GammaParams>;

impl<'a> Distribution<'a, GammaParams> {
    /// Creates a Gamma distribution with shape `alpha` and rate `beta`.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` unless both are finite and positive.
    pub fn new(generator: &'a mut dyn Generator, alpha: f64, beta: f64) -> Result<Self> {
        Self::from_params(generator, GammaParams::new(alpha, beta))
    }

    /// Shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.params().alpha
    }

    /// Rate parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.params().beta
    }

    /// Replaces the shape, keeping the rate.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.set_params(GammaParams { alpha, ..*self.params() })
    }

    /// Replaces the rate, keeping the shape.
    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        self.set_params(GammaParams { beta, ..*self.params() })
    }
}

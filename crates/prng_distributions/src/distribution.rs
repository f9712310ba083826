//! A parameterised distribution bound to a generator.
//!
//! [`Distribution`] couples three things:
//! - a borrowed [`Generator`] supplying uniform steps
//! - a parameter tuple `P` that always satisfies the active validator
//! - replaceable validator and sampler strategies, defaulting to
//!   [`DistributionParams::is_valid`] and [`DistributionParams::sample`]
//!
//! Invalid parameters are rejected when assigned, so sampling never fails.

use std::fmt;

use prng_core::Generator;

use crate::error::{DistributionError, Result};
use crate::params::DistributionParams;

/// Joint validity predicate over a parameter tuple.
pub type Validator<P> = Box<dyn Fn(&P) -> bool + Send + Sync>;

/// Sampling algorithm mapping a generator and parameters to one value.
pub type Sampler<P> = Box<dyn Fn(&mut dyn Generator, &P) -> f64 + Send + Sync>;

fn standard_validator<P: DistributionParams>() -> Validator<P> {
    Box::new(|params: &P| params.is_valid())
}

fn standard_sampler<P: DistributionParams>() -> Sampler<P> {
    Box::new(|generator: &mut dyn Generator, params: &P| params.sample(generator))
}

/// A distribution with parameters `P`, drawing from a borrowed generator.
///
/// The generator is borrowed mutably for the distribution's lifetime; drop
/// the distribution (or use [`Distribution::generator`]) to step it
/// directly.
///
/// # Examples
///
/// ```
/// use prng_core::{Generator, TricycleGenerator};
/// use prng_distributions::{GammaDistribution, GammaParams};
///
/// let mut rng = TricycleGenerator::new(42);
/// let mut gamma = GammaDistribution::new(&mut rng, 2.0, 1.0).unwrap();
///
/// // Restrict the shape to integers (Erlang).
/// gamma.set_validator(|p: &GammaParams| p.alpha.fract() == 0.0 && p.beta > 0.0).unwrap();
/// assert!(gamma.set_alpha(2.5).is_err());
/// assert_eq!(gamma.alpha(), 2.0);
///
/// assert!(gamma.next_f64() >= 0.0);
/// ```
pub struct Distribution<'a, P: DistributionParams> {
    generator: &'a mut dyn Generator,
    params: P,
    validator: Validator<P>,
    sampler: Sampler<P>,
}

impl<'a, P: DistributionParams> Distribution<'a, P> {
    /// Binds `params` to `generator` using the standard strategies.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if `params` fails the standard validity
    /// predicate.
    pub fn from_params(generator: &'a mut dyn Generator, params: P) -> Result<Self> {
        let distribution = Self {
            generator,
            params,
            validator: standard_validator(),
            sampler: standard_sampler(),
        };
        distribution.check(&params)?;
        Ok(distribution)
    }

    /// Current parameters.
    #[inline]
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Assigns a new parameter tuple.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if the active validator rejects `params`; the
    /// previous parameters are kept.
    pub fn set_params(&mut self, params: P) -> Result<()> {
        self.check(&params)?;
        self.params = params;
        Ok(())
    }

    /// Whether the active validator accepts `params`.
    #[inline]
    pub fn accepts(&self, params: &P) -> bool {
        (self.validator)(params)
    }

    /// Installs a custom validity predicate.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if the current parameters fail `validator`; the
    /// previous predicate stays active.
    pub fn set_validator<F>(&mut self, validator: F) -> Result<()>
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        if !validator(&self.params) {
            tracing::debug!(
                distribution = P::NAME,
                params = ?self.params,
                "validator refused: current parameters would become invalid"
            );
            return Err(DistributionError::invalid(&self.params));
        }
        self.validator = Box::new(validator);
        tracing::debug!(distribution = P::NAME, "installed custom validator");
        Ok(())
    }

    /// Installs a custom sampling algorithm.
    pub fn set_sampler<F>(&mut self, sampler: F)
    where
        F: Fn(&mut dyn Generator, &P) -> f64 + Send + Sync + 'static,
    {
        self.sampler = Box::new(sampler);
        tracing::debug!(distribution = P::NAME, "installed custom sampler");
    }

    /// Restores the standard validator and sampler.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if the current parameters fail the standard
    /// predicate; nothing is changed in that case.
    pub fn reset_strategies(&mut self) -> Result<()> {
        if !self.params.is_valid() {
            tracing::debug!(
                distribution = P::NAME,
                params = ?self.params,
                "standard strategies refused: current parameters would become invalid"
            );
            return Err(DistributionError::invalid(&self.params));
        }
        self.validator = standard_validator();
        self.sampler = standard_sampler();
        Ok(())
    }

    /// The underlying generator.
    #[inline]
    pub fn generator(&mut self) -> &mut dyn Generator {
        &mut *self.generator
    }

    /// Draws one sample.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.sampler)(&mut *self.generator, &self.params)
    }

    /// Draws one sample truncated toward zero.
    ///
    /// Values beyond the `i32` range saturate and NaN maps to zero.
    #[inline]
    pub fn next_i32(&mut self) -> i32 {
        self.next_f64() as i32
    }

    /// Fills `buffer` with consecutive samples.
    pub fn fill(&mut self, buffer: &mut [f64]) {
        for slot in buffer.iter_mut() {
            *slot = self.next_f64();
        }
    }

    /// Expected value.
    pub fn mean(&self) -> Result<f64> {
        self.params.mean()
    }

    /// 50th percentile.
    pub fn median(&self) -> Result<f64> {
        self.params.median()
    }

    /// Location of the density maximum.
    pub fn mode(&self) -> Result<f64> {
        self.params.mode()
    }

    /// Second central moment.
    pub fn variance(&self) -> Result<f64> {
        self.params.variance()
    }

    /// Lower end of the support.
    pub fn minimum(&self) -> Result<f64> {
        self.params.minimum()
    }

    /// Upper end of the support.
    pub fn maximum(&self) -> Result<f64> {
        self.params.maximum()
    }

    fn check(&self, params: &P) -> Result<()> {
        if self.accepts(params) {
            Ok(())
        } else {
            tracing::debug!(
                distribution = P::NAME,
                params = ?params,
                "rejected distribution parameters"
            );
            Err(DistributionError::invalid(params))
        }
    }
}

impl<P: DistributionParams> fmt::Debug for Distribution<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Distribution")
            .field("name", &P::NAME)
            .field("params", &self.params)
            .field("generator", &self.generator.tag())
            .finish_non_exhaustive()
    }
}

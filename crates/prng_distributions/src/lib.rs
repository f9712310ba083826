//! # prng_distributions: Parameterised Distributions over Reversible Generators
//!
//! ## Layer 2 (Sampling) Role
//!
//! prng_distributions builds on `prng_core` and provides:
//! - The [`DistributionParams`] contract and the generic [`Distribution`]
//!   wrapper with replaceable validator and sampler strategies
//! - Normal, Gamma and Kumaraswamy parameter tuples with their standard
//!   samplers and summary statistics
//! - [`probit`] and the special functions it relies on (`special`)
//! - Error types: [`DistributionError`] and [`Statistic`]
//!
//! ## Invariants
//!
//! A distribution's parameters always satisfy its active validator: every
//! assignment is checked first, and a rejected assignment leaves the
//! distribution untouched. Sampling therefore never fails.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::TricycleGenerator;
//! use prng_distributions::{KumaraswamyDistribution, NormalDistribution};
//!
//! let mut rng = TricycleGenerator::new(42);
//!
//! let mut normal = NormalDistribution::new(&mut rng, 5.0, 2.0).unwrap();
//! let x = normal.next_f64();
//! assert!(x.is_finite());
//! assert_eq!(normal.variance().unwrap(), 4.0);
//! drop(normal);
//!
//! let mut kumaraswamy = KumaraswamyDistribution::new(&mut rng, 2.0, 2.0).unwrap();
//! let y = kumaraswamy.next_f64();
//! assert!((0.0..=1.0).contains(&y));
//! assert!(kumaraswamy.mean().is_err());
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distribution;
pub mod error;
pub mod gamma;
pub mod kumaraswamy;
pub mod normal;
pub mod params;
pub mod special;

pub use distribution::{Distribution, Sampler, Validator};
pub use error::{DistributionError, Result, Statistic};
pub use gamma::{sample_gamma, GammaDistribution, GammaParams};
pub use kumaraswamy::{sample_kumaraswamy, KumaraswamyDistribution, KumaraswamyParams};
pub use normal::{probit, sample_normal, NormalDistribution, NormalParams};
pub use params::DistributionParams;

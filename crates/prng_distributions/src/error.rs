//! Error types for the distribution layer.
//!
//! Parameter problems surface when parameters are assigned, never while
//! sampling. Statistic queries distinguish between "undefined for these
//! parameters" and "no closed form implemented".

use std::fmt;

use thiserror::Error;

use crate::params::DistributionParams;

/// Convenience alias for results carrying a [`DistributionError`].
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Summary statistics a distribution can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Expected value.
    Mean,
    /// 50th percentile.
    Median,
    /// Location of the density maximum.
    Mode,
    /// Second central moment.
    Variance,
    /// Lower end of the support.
    Minimum,
    /// Upper end of the support.
    Maximum,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Mode => "mode",
            Statistic::Variance => "variance",
            Statistic::Minimum => "minimum",
            Statistic::Maximum => "maximum",
        };
        f.write_str(name)
    }
}

/// Categorised distribution errors.
///
/// # Variants
/// - `InvalidParameters`: the parameter tuple failed the validity predicate
/// - `StatisticUnsupported`: the statistic is undefined for the current
///   parameters
/// - `StatisticNotImplemented`: the statistic has no closed form here
///
/// # Examples
/// ```
/// use prng_distributions::{DistributionError, Statistic};
///
/// let err = DistributionError::StatisticNotImplemented {
///     distribution: "Kumaraswamy",
///     statistic: Statistic::Mean,
///     reason: "no closed form",
/// };
/// assert_eq!(
///     err.to_string(),
///     "mean of the Kumaraswamy distribution is not implemented: no closed form"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistributionError {
    /// Parameters rejected by the validity predicate.
    #[error("Invalid parameters for the {distribution} distribution: {params}")]
    InvalidParameters {
        /// Distribution name.
        distribution: &'static str,
        /// Debug rendering of the rejected tuple.
        params: String,
    },

    /// Statistic undefined for the current parameters.
    #[error("{statistic} of the {distribution} distribution is undefined: {reason}")]
    StatisticUnsupported {
        /// Distribution name.
        distribution: &'static str,
        /// Requested statistic.
        statistic: Statistic,
        /// Why it is undefined.
        reason: String,
    },

    /// Statistic not available in closed form.
    #[error("{statistic} of the {distribution} distribution is not implemented: {reason}")]
    StatisticNotImplemented {
        /// Distribution name.
        distribution: &'static str,
        /// Requested statistic.
        statistic: Statistic,
        /// Why it is not implemented.
        reason: &'static str,
    },
}

impl DistributionError {
    /// Builds `InvalidParameters` for `params`.
    pub fn invalid<P: DistributionParams>(params: &P) -> Self {
        Self::InvalidParameters {
            distribution: P::NAME,
            params: format!("{:?}", params),
        }
    }

    /// Builds `StatisticUnsupported` for distribution `P`.
    pub fn unsupported<P: DistributionParams>(statistic: Statistic, reason: impl Into<String>) -> Self {
        Self::StatisticUnsupported {
            distribution: P::NAME,
            statistic,
            reason: reason.into(),
        }
    }

    /// Builds `StatisticNotImplemented` for distribution `P`.
    pub fn not_implemented<P: DistributionParams>(statistic: Statistic, reason: &'static str) -> Self {
        Self::StatisticNotImplemented {
            distribution: P::NAME,
            statistic,
            reason,
        }
    }

    /// Whether this is one of the two statistic errors.
    pub fn is_statistic_error(&self) -> bool {
        matches!(
            self,
            Self::StatisticUnsupported { .. } | Self::StatisticNotImplemented { .. }
        )
    }
}

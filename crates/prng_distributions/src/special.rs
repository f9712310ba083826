//! Special functions backing the Normal distribution.
//!
//! The complementary error function is evaluated to near machine precision
//! so that it can serve as the residual in the inverse-CDF refinement step.

use std::f64::consts::{FRAC_2_SQRT_PI, PI, SQRT_2};

/// Below this argument `erfc` uses the Maclaurin series of `erf`; above it
/// a continued fraction.
const SERIES_LIMIT: f64 = 2.5;

const MAX_SERIES_TERMS: u32 = 200;
const MAX_FRACTION_TERMS: u32 = 500;

/// Substitute for a zero denominator in the modified Lentz algorithm.
const TINY: f64 = 1.0e-300;

/// Complementary error function, `1 - erf(x)`.
///
/// Relative error is below `1e-13` over the whole real line.
///
/// # Examples
/// ```
/// use prng_distributions::special::erfc;
/// use approx::assert_relative_eq;
///
/// assert_eq!(erfc(0.0), 1.0);
/// assert_relative_eq!(erfc(1.0), 0.157_299_207_050_285_13, max_relative = 1e-13);
/// ```
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 2.0 - erfc(-x);
    }
    if x == f64::INFINITY {
        return 0.0;
    }
    if x < SERIES_LIMIT {
        1.0 - erf_series(x)
    } else {
        erfc_continued_fraction(x)
    }
}

/// Standard normal cumulative distribution function.
///
/// # Examples
/// ```
/// use prng_distributions::special::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert!(norm_cdf(-40.0) >= 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

fn erf_series(z: f64) -> f64 {
    if z == 0.0 {
        return 0.0;
    }
    let z2 = z * z;
    let mut term = z;
    let mut sum = z;
    for n in 1..MAX_SERIES_TERMS {
        term *= 2.0 * z2 / f64::from(2 * n + 1);
        sum += term;
        if term <= sum * f64::EPSILON {
            break;
        }
    }
    FRAC_2_SQRT_PI * (-z2).exp() * sum
}

// erfc(z) = exp(-z^2) / sqrt(pi) * 1 / (z + (1/2) / (z + 1 / (z + (3/2) / (z + ...))))
fn erfc_continued_fraction(z: f64) -> f64 {
    let mut f = z;
    let mut c = f;
    let mut d = 0.0;
    for k in 1..=MAX_FRACTION_TERMS {
        let a = f64::from(k) * 0.5;
        d = z + a * d;
        if d == 0.0 {
            d = TINY;
        }
        c = z + a / c;
        if c == 0.0 {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = c * d;
        f *= delta;
        if (delta - 1.0).abs() < f64::EPSILON {
            break;
        }
    }
    (-z * z).exp() / (PI.sqrt() * f)
}

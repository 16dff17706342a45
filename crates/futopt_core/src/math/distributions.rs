//! Standard normal distribution functions.
//!
//! This module provides:
//! - `normal_density`: Probability density function (PDF), exact
//! - `normal_cdf`: Cumulative distribution function (CDF), Zelen & Severo approximation
//!
//! Every pricing formula downstream is calibrated against this particular CDF
//! approximation, so its coefficients are fixed. Swapping in an erf-based CDF
//! moves prices in the least significant digits.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Zelen & Severo (Abramowitz and Stegun 26.2.17) constants.
const P: f64 = 0.231_641_9;
const B1: f64 = 0.319_381_5;
const B2: f64 = -0.356_563_8;
const B3: f64 = 1.781_478;
const B4: f64 = -1.821_256;
const B5: f64 = 1.330_274;

/// Standard normal probability density function.
///
/// Computes φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative and even in `x`.
///
/// # Examples
/// ```
/// use futopt_core::math::distributions::normal_density;
///
/// let pdf_0 = normal_density(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-9);
///
/// let pdf_1 = normal_density(1.0_f64);
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn normal_density<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Standard normal cumulative distribution function.
///
/// Approximates P(X <= x) for X ~ N(0, 1) with the fifth order rational
/// polynomial of Zelen & Severo:
///
/// ```text
/// t    = 1 / (1 + 0.2316419·|x|)
/// poly = b1·t + b2·t² + b3·t³ + b4·t⁴ + b5·t⁵
/// Φ(x) ≈ 1 - φ(x)·poly   for x > 0
/// Φ(x) ≈ φ(x)·poly       otherwise
/// ```
///
/// # Accuracy
/// Absolute error stays below 2e-7 over the real line. Because the tail
/// term depends only on `|x|`, `normal_cdf(x) + normal_cdf(-x) == 1` holds to
/// rounding for every `x != 0`.
///
/// # Examples
/// ```
/// use futopt_core::math::distributions::normal_cdf;
///
/// assert!((normal_cdf(0.0_f64) - 0.5).abs() < 1e-6);
/// assert!(normal_cdf(-3.0_f64) < 0.01);
/// assert!(normal_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn normal_cdf<T: Float>(x: T) -> T {
    let one = T::one();

    let t = one / (one + T::from(P).unwrap() * x.abs());
    let d = normal_density(x);

    // Horner's method
    let poly = T::from(B1).unwrap()
        + t * (T::from(B2).unwrap()
            + t * (T::from(B3).unwrap() + t * (T::from(B4).unwrap() + t * T::from(B5).unwrap())));
    let prob = d * t * poly;

    if x > T::zero() {
        one - prob
    } else {
        prob
    }
}

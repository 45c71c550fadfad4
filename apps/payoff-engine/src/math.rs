//! Normal distribution primitives.
//!
//! Closed-form valuation needs the standard normal CDF; this module provides
//! a fixed-coefficient rational approximation that stays within ~1e-7 of the
//! true value everywhere without pulling in an erf implementation.

use std::f64::consts::PI;

/// Coefficients of the Abramowitz & Stegun 26.2.17 rational approximation.
const A: [f64; 5] = [
    0.319_381_530,
    -0.356_563_782,
    1.781_477_937,
    -1.821_255_978,
    1.330_274_429,
];

/// Scale constant `p` of the approximation variable `t = 1 / (1 + p|x|)`.
const P: f64 = 0.231_641_9;

/// Standard normal CDF (cumulative distribution function).
///
/// Evaluates a five-term polynomial in `t = 1 / (1 + p|x|)` weighted by the
/// normal density; maximum absolute error is about 7.5e-8. Negative
/// arguments use the symmetry `Φ(-x) = 1 - Φ(x)`.
///
/// Total function: NaN maps to 0.5, ±∞ map to 0/1, and every result lies
/// in [0, 1].
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return 0.5;
    }

    let (z, negated) = if x < 0.0 { (-x, true) } else { (x, false) };

    let t = 1.0 / (1.0 + P * z);
    let poly = t * (A[0] + t * (A[1] + t * (A[2] + t * (A[3] + t * A[4]))));
    let cdf = 1.0 - norm_pdf(z) * poly;

    if negated { 1.0 - cdf } else { cdf }
}

/// Standard normal PDF (probability density function).
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Standard normal table values.
        let cases = [
            (-3.0, 0.001_349_898),
            (-1.96, 0.024_997_895),
            (-1.0, 0.158_655_254),
            (0.0, 0.5),
            (1.0, 0.841_344_746),
            (1.96, 0.975_002_105),
            (3.0, 0.998_650_102),
        ];

        for (x, expected) in cases {
            let got = norm_cdf(x);
            assert!(
                approx_eq(got, expected, 2e-7),
                "norm_cdf({x}) expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [0.0, 0.1, 0.5, 1.0, 2.5, 7.0, 20.0] {
            let sum = norm_cdf(x) + norm_cdf(-x);
            assert!(approx_eq(sum, 1.0, 1e-6), "phi({x}) + phi(-{x}) = {sum}");
        }
    }

    #[test]
    fn test_norm_cdf_is_total() {
        assert!(approx_eq(norm_cdf(f64::NAN), 0.5, 1e-12));
        assert!(approx_eq(norm_cdf(f64::INFINITY), 1.0, 1e-12));
        assert!(approx_eq(norm_cdf(f64::NEG_INFINITY), 0.0, 1e-12));

        for x in [-40.0, -8.0, -0.5, 0.0, 0.5, 8.0, 40.0] {
            let phi = norm_cdf(x);
            assert!((0.0..=1.0).contains(&phi), "norm_cdf({x}) = {phi}");
        }
    }

    #[test]
    fn test_norm_pdf_peak_and_symmetry() {
        // Peak at 1/sqrt(2*pi).
        assert!(approx_eq(norm_pdf(0.0), 0.398_942_280, 1e-9));
        assert!(approx_eq(norm_pdf(1.5), norm_pdf(-1.5), 1e-15));
        assert!(approx_eq(norm_pdf(f64::NAN), 0.0, 1e-15));
    }
}

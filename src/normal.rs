//! Standard normal density and fixed-resolution numerical integration.
//!
//! # Algorithm
//!
//! The definite integral of the density is approximated with the composite
//! Simpson 1/3 rule over [`SIMPSON_INTERVALS`] evenly spaced subintervals:
//!
//! ```text
//! ∫ₐᵇ φ(x) dx ≈ (d/3) · (φ(a) + 4·Σ φ(x_odd) + 2·Σ φ(x_even) + φ(b))
//! ```
//!
//! where `d = (b - a) / n`. This is fixed-resolution quadrature: accuracy
//! is bounded by the chosen `n`, and no error estimate or adaptive
//! refinement is performed.
//!
//! Reference: Burden & Faires (2011), *Numerical Analysis*, 9th ed.,
//! §4.4 (composite Simpson's rule).

/// 1/√(2π) ≈ 0.3989422804014327
const FRAC_1_SQRT_2PI: f64 = 0.3989422804014326779399460599343818684758586311649;

/// Number of subintervals used by [`integrate`]. Must be even.
///
/// Fixed at 100: more than enough for the ±[`TAIL_BOUND`] ranges the tail
/// probabilities use, and kept constant so results are reproducible across
/// callers. Tune here, not at call sites.
pub const SIMPSON_INTERVALS: usize = 100;

/// Finite stand-in for an infinite integration bound, in standard
/// deviations.
///
/// The density at 10σ is ~1e-23, far below the quadrature resolution, so
/// integrating to ±10 is indistinguishable from integrating to ±∞ at this
/// fixed `n`. If extreme-tail accuracy ever matters, this constant (and
/// [`SIMPSON_INTERVALS`]) are the knobs to revisit.
pub const TAIL_BOUND: f64 = 10.0;

/// The standard normal probability density φ(x) = exp(-x²/2) / √(2π).
///
/// # Examples
///
/// ```
/// use u_describe::normal::density;
///
/// assert!((density(0.0) - 0.3989422804014327).abs() < 1e-15);
/// assert!(density(3.0) < density(0.0));
/// ```
pub fn density(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Integrates the standard normal density from `a` to `b` using the
/// composite Simpson 1/3 rule with [`SIMPSON_INTERVALS`] subintervals.
///
/// Caller contract: `a <= b` (both finite). The bounds are not validated;
/// `b < a` yields the signed (negative) integral, and a NaN bound yields
/// NaN.
///
/// # Examples
///
/// ```
/// use u_describe::normal::integrate;
///
/// // Full mass, one-sigma mass.
/// assert!((integrate(-10.0, 10.0) - 1.0).abs() < 1e-6);
/// assert!((integrate(-1.0, 1.0) - 0.6827).abs() < 1e-4);
/// ```
pub fn integrate(a: f64, b: f64) -> f64 {
    let n = SIMPSON_INTERVALS;
    let d = (b - a) / n as f64;

    let mut odd = 0.0; // weight 4
    let mut even = 0.0; // weight 2
    for i in 1..n {
        let y = density(a + i as f64 * d);
        if i % 2 == 1 {
            odd += y;
        } else {
            even += y;
        }
    }

    d / 3.0 * (density(a) + 4.0 * odd + 2.0 * even + density(b))
}

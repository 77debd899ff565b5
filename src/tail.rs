//! Tail and interval probabilities via z-score standardization.
//!
//! The sample mean μ and sample standard deviation σ are estimated from the
//! data, raw values are standardized to z-scores `(x - μ) / σ`, and the
//! standard normal density is integrated over the requested range (see
//! [`crate::normal`]). Infinite tails use the finite
//! [`TAIL_BOUND`](crate::normal::TAIL_BOUND) stand-in.

use std::fmt;

use crate::descriptive::{mean, std_dev};
use crate::normal::{integrate, TAIL_BOUND};

/// Which probability to compute from the fitted normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailMode {
    /// P(X < x1): lower tail.
    LessThan,
    /// P(x1 < X < x2): interval.
    Interval,
    /// P(X > x1): upper tail.
    GreaterThan,
}

/// An unrecognized raw mode selector.
///
/// Carries the rejected code. This is a programmer error, reported as an
/// explicit `Err` rather than a NaN sentinel: NaN means "data present but
/// statistically undefined", while a bad selector means the call itself is
/// wrong and no numeric result exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMode(pub i32);

impl fmt::Display for InvalidMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tail mode code {} (expected 0, 1, or 2)", self.0)
    }
}

impl std::error::Error for InvalidMode {}

impl TailMode {
    /// Converts a raw mode code to a [`TailMode`].
    ///
    /// Codes: 0 = [`LessThan`](TailMode::LessThan),
    /// 1 = [`Interval`](TailMode::Interval),
    /// 2 = [`GreaterThan`](TailMode::GreaterThan).
    ///
    /// # Errors
    ///
    /// Any other code is [`InvalidMode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_describe::tail::{InvalidMode, TailMode};
    ///
    /// assert_eq!(TailMode::from_code(1), Ok(TailMode::Interval));
    /// assert_eq!(TailMode::from_code(7), Err(InvalidMode(7)));
    /// ```
    pub fn from_code(code: i32) -> Result<Self, InvalidMode> {
        match code {
            0 => Ok(Self::LessThan),
            1 => Ok(Self::Interval),
            2 => Ok(Self::GreaterThan),
            other => Err(InvalidMode(other)),
        }
    }
}

/// Computes a normal tail or interval probability for `data`.
///
/// Fits a normal distribution to the sample (mean μ, sample standard
/// deviation σ), standardizes the raw bound(s) to z-scores, and integrates
/// the standard normal density:
///
/// - [`TailMode::LessThan`]: P(X < x1), integrating from `-TAIL_BOUND` to
///   `(x1 - μ)/σ`. `x2` is ignored.
/// - [`TailMode::Interval`]: P(x1 < X < x2), integrating from `(x1 - μ)/σ`
///   to `(x2 - μ)/σ`. The caller must ensure `x1 <= x2`; with `x1 > x2`
///   the result is the signed (negative) area, returned uncorrected.
/// - [`TailMode::GreaterThan`]: P(X > x1), integrating from `(x1 - μ)/σ`
///   to `TAIL_BOUND`. `x2` is ignored.
///
/// # Returns
///
/// A probability in `[0, 1]` up to quadrature accuracy. With fewer than two
/// samples σ is unavailable or NaN, and the NaN propagates through the
/// standardization arithmetic to a NaN result; there is no special-casing.
///
/// # Examples
///
/// ```
/// use u_describe::tail::{tail_probability, TailMode};
///
/// // Sample with mean 10 and standard deviation 2.
/// let data = [8.0, 10.0, 12.0];
///
/// // P(X < 10) = 0.5 for the fitted normal.
/// let p = tail_probability(&data, TailMode::LessThan, 10.0, 0.0);
/// assert!((p - 0.5).abs() < 1e-6);
///
/// // One observation: indeterminate.
/// assert!(tail_probability(&[3.0], TailMode::LessThan, 1.0, 0.0).is_nan());
/// ```
pub fn tail_probability(data: &[f64], mode: TailMode, x1: f64, x2: f64) -> f64 {
    let mu = mean(data).unwrap_or(f64::NAN);
    let sigma = std_dev(data).unwrap_or(f64::NAN);

    match mode {
        TailMode::LessThan => integrate(-TAIL_BOUND, (x1 - mu) / sigma),
        TailMode::Interval => integrate((x1 - mu) / sigma, (x2 - mu) / sigma),
        TailMode::GreaterThan => integrate((x1 - mu) / sigma, TAIL_BOUND),
    }
}

//! Descriptive statistics: five-number summary, mean, variance, standard
//! deviation.
//!
//! All functions borrow their input immutably and never reorder it; the
//! five-number summary sorts a private copy. Empty input is "no data" and
//! yields `None`. A single observation is data, but leaves the sample
//! variance undefined — that case is the `f64::NAN` sentinel, kept distinct
//! from `None` so callers can tell "nothing to summarize" from "summary is
//! statistically indeterminate".
//!
//! # Quartile method
//!
//! Quartiles are medians of the lower/upper half of the sorted data (the
//! "median-of-subarray" method, Tukey's hinges for even n). This differs
//! from the R-7 linear interpolation used by R and NumPy by design: for
//! small n the two methods disagree, and this crate pins the subarray
//! definition.
//!
//! Reference: Tukey (1977), *Exploratory Data Analysis*, Chapter 2.

/// The five-number summary of a dataset.
///
/// Produced by [`five_number_summary`]. For a single-element dataset all
/// five fields equal that element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    /// Smallest observation.
    pub min: f64,
    /// First quartile: median of the lower half.
    pub q1: f64,
    /// Median of the full dataset.
    pub median: f64,
    /// Third quartile: median of the upper half.
    pub q3: f64,
    /// Largest observation.
    pub max: f64,
}

/// Computes the five-number summary (min, Q1, median, Q3, max).
///
/// Sorts a private copy of the data (`f64::total_cmp` order); the input is
/// never mutated. For sorted data of length `n`:
///
/// - `n` odd: median is the element at index `(n-1)/2`; each half has
///   length `L = (n-1)/2` and the upper half starts at index `L + 1`
///   (the median itself belongs to neither half).
/// - `n` even: median is the average of the elements at `n/2 - 1` and
///   `n/2`; each half has length `L = n/2` and the upper half starts at
///   index `L`.
///
/// Q1 and Q3 apply the same odd/even median rule to those two index ranges.
/// For `n` = 2 or 3 the halves have length 1, so Q1 and Q3 degenerate to
/// the boundary elements themselves.
///
/// # Returns
///
/// `None` if the data is empty.
///
/// # Examples
///
/// ```
/// use u_describe::descriptive::five_number_summary;
///
/// let s = five_number_summary(&[5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
/// assert_eq!(s.min, 1.0);
/// assert_eq!(s.q1, 1.5);
/// assert_eq!(s.median, 3.0);
/// assert_eq!(s.q3, 4.5);
/// assert_eq!(s.max, 5.0);
///
/// assert!(five_number_summary(&[]).is_none());
/// ```
pub fn five_number_summary(data: &[f64]) -> Option<FiveNumberSummary> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        let x = data[0];
        return Some(FiveNumberSummary {
            min: x,
            q1: x,
            median: x,
            q3: x,
            max: x,
        });
    }

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    // Median of the whole dataset, plus the geometry of the two halves:
    // their common length and the starting index of the upper half.
    let (median, sub_len, start_upper) = if n % 2 == 1 {
        (sorted[(n - 1) / 2], (n - 1) / 2, (n - 1) / 2 + 1)
    } else {
        ((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0, n / 2, n / 2)
    };

    // Q1/Q3: the same median rule applied to the implicit index ranges
    // [0, sub_len) and [start_upper, start_upper + sub_len).
    let (q1, q3) = if sub_len % 2 == 1 {
        let mid = (sub_len - 1) / 2;
        (sorted[mid], sorted[start_upper + mid])
    } else {
        let mid = sub_len / 2;
        (
            (sorted[mid - 1] + sorted[mid]) / 2.0,
            (sorted[start_upper + mid - 1] + sorted[start_upper + mid]) / 2.0,
        )
    };

    Some(FiveNumberSummary {
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[n - 1],
    })
}

/// Computes the arithmetic mean.
///
/// Plain left-to-right summation in input order. No compensated summation
/// is used, so very large datasets mixing magnitudes are exposed to
/// catastrophic cancellation; this is a documented limitation, accepted
/// for output compatibility.
///
/// # Returns
///
/// `None` if the data is empty.
///
/// # Examples
///
/// ```
/// use u_describe::descriptive::mean;
///
/// assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Computes the sample variance (Bessel's correction, divisor `n - 1`).
///
/// Two-pass formula: sum of squared deviations from the mean, divided by
/// `n - 1`.
///
/// # Returns
///
/// - `None` if the data is empty.
/// - `Some(f64::NAN)` for a single observation: the squared-deviation sum
///   is 0 and the divisor is 0, and the resulting 0/0 is deliberately left
///   to propagate. `None` means "no data"; NaN means "data present but the
///   sample variance is undefined".
///
/// # Examples
///
/// ```
/// use u_describe::descriptive::variance;
///
/// assert_eq!(variance(&[2.0, 4.0, 6.0]), Some(4.0));
/// assert!(variance(&[7.0]).unwrap().is_nan());
/// assert_eq!(variance(&[]), None);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let avg = mean(data)?;
    let sq_sum: f64 = data.iter().map(|&x| (x - avg) * (x - avg)).sum();
    // n = 1 gives 0.0 / 0.0 = NaN, the documented indeterminate sentinel.
    Some(sq_sum / (n - 1) as f64)
}

/// Computes the sample standard deviation.
///
/// Equivalent to `sqrt(variance(data))`; `None` and NaN propagate
/// unchanged (`sqrt(NaN)` is NaN).
///
/// # Examples
///
/// ```
/// use u_describe::descriptive::std_dev;
///
/// assert_eq!(std_dev(&[2.0, 4.0, 6.0]), Some(2.0));
/// assert!(std_dev(&[7.0]).unwrap().is_nan());
/// assert_eq!(std_dev(&[]), None);
/// ```
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn summary_is_ordered(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..=200)
        ) {
            let s = five_number_summary(&data).expect("non-empty");
            prop_assert!(s.min <= s.q1, "min {} > q1 {}", s.min, s.q1);
            prop_assert!(s.q1 <= s.median, "q1 {} > median {}", s.q1, s.median);
            prop_assert!(s.median <= s.q3, "median {} > q3 {}", s.median, s.q3);
            prop_assert!(s.q3 <= s.max, "q3 {} > max {}", s.q3, s.max);
        }

        #[test]
        fn mean_lies_between_extremes(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..=200)
        ) {
            let s = five_number_summary(&data).expect("non-empty");
            let m = mean(&data).expect("non-empty");
            // Plain summation: allow for accumulated rounding at large magnitudes.
            let tol = 1e-12 * data.len() as f64 * s.min.abs().max(s.max.abs()).max(1.0);
            prop_assert!(m >= s.min - tol && m <= s.max + tol, "mean {m} outside [{}, {}]", s.min, s.max);
        }

        #[test]
        fn variance_is_non_negative(
            data in proptest::collection::vec(-1e6_f64..1e6, 2..=200)
        ) {
            let v = variance(&data).expect("non-empty");
            prop_assert!(v >= 0.0, "variance = {v}");
        }

        #[test]
        fn summary_leaves_input_unchanged(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..=50)
        ) {
            let before = data.clone();
            let _ = five_number_summary(&data);
            prop_assert_eq!(data, before);
        }
    }
}

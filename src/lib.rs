//! # u-describe
//!
//! Descriptive statistics (five-number summary, mean, variance, standard
//! deviation) and standard-normal tail/interval probabilities for lists of
//! `f64` samples.
//!
//! This crate is deliberately self-contained: it targets callers who need a
//! quick statistical summary or a z-score probability without pulling in a
//! full statistics library. The numeric core is the algorithm set itself —
//! median-of-subarray quartiles and composite Simpson integration of the
//! Gaussian density.
//!
//! ## Modules
//!
//! - [`descriptive`] — Five-number summary, mean, sample variance, standard
//!   deviation
//! - [`normal`] — Standard normal density and fixed-resolution Simpson
//!   integration
//! - [`tail`] — Tail and interval probabilities via z-score standardization
//!
//! ## Design Philosophy
//!
//! - **Inputs are never mutated**: any ordering work happens on a private
//!   copy of the data
//! - **Absent vs. indeterminate**: empty input yields `None` ("no data");
//!   a statistically undefined result on present data (e.g. the sample
//!   variance of a single observation) is the `f64::NAN` sentinel and
//!   propagates arithmetically
//! - **Fixed-resolution quadrature**: integration accuracy is set by a
//!   documented constant, not an adaptive scheme

pub mod descriptive;
pub mod normal;
pub mod tail;

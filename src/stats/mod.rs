//! Descriptive statistics and linear trend fitting over indicator values
//!
//! Every spread measure in this crate is a *population* statistic (sum of
//! squared deviations divided by `n`).

pub mod descriptive;
pub mod regression;

use serde::{Deserialize, Serialize};

pub use descriptive::{mean, mean_abs, population_std_dev};
pub use regression::{LinearTrend, linear_trend, linear_trend_xy};

/// Summary statistics of an indicator series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// `std_dev / mean * 100`; `None` when the mean is zero
    pub coefficient_of_variation: Option<f64>,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// OLS slope per period against the observation index
    pub slope: f64,
    /// OLS intercept at index 0
    pub intercept: f64,
    /// Coefficient of determination of the OLS fit; 0 for a constant series
    pub r_squared: f64,
}

/// Compute summary statistics and the OLS trend line of a series
///
/// # Preconditions
/// `values` must be non-empty and every value finite. Both are guaranteed by
/// the upstream cleaning step and are only checked in debug builds.
///
/// # Example
/// ```rust
/// use trendcast::stats;
///
/// let summary = stats::summarize(&[2.0, 4.0, 6.0, 8.0]);
/// assert_eq!(summary.mean, 5.0);
/// assert!((summary.slope - 2.0).abs() < 1e-12);
/// assert!((summary.r_squared - 1.0).abs() < 1e-12);
/// ```
pub fn summarize(values: &[f64]) -> StatisticsSummary {
    debug_assert!(!values.is_empty(), "summarize requires at least one value");
    descriptive::summarize_impl(values)
}

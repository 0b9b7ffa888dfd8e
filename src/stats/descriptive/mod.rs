// Descriptive statistics

use crate::stats::regression::linear_trend;
use crate::stats::StatisticsSummary;

/// Arithmetic mean; 0 for empty input
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of absolute values, the magnitude scale used by the trend classifier
pub fn mean_abs(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v.abs()).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`); 0 for empty input
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Internal implementation behind [`crate::stats::summarize`]
pub(crate) fn summarize_impl(values: &[f64]) -> StatisticsSummary {
    let count = values.len();
    let mean = mean(values);
    let std_dev = population_std_dev(values);

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    // CV is undefined at a zero mean, within the rounding error of the sum
    let zero_mean_bound = f64::EPSILON * count as f64 * mean_abs(values);
    let coefficient_of_variation = if mean.abs() <= zero_mean_bound {
        None
    } else {
        Some(std_dev / mean * 100.0)
    };

    let trend = linear_trend(values);

    StatisticsSummary {
        count,
        mean,
        std_dev,
        coefficient_of_variation,
        min,
        max,
        slope: trend.slope,
        intercept: trend.intercept,
        r_squared: trend.r_squared,
    }
}

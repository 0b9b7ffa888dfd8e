//! Trend analysis entry points
//!
//! [`analyze`] runs the full pipeline on one series:
//! statistics → decomposition → trend label + forecast. No state is kept
//! between calls.
//!
//! # Example
//!
//! ```rust
//! use trendcast::config::AnalysisOptions;
//! use trendcast::temporal::Frequency;
//! use trendcast::time_series::{analyze_values, TrendDirection};
//!
//! let values: Vec<f64> = (0..12).map(|i| 100.0 + 10.0 * i as f64).collect();
//! let result = analyze_values(&values, Frequency::Monthly, &AnalysisOptions::default()).unwrap();
//!
//! assert_eq!(result.trend.direction, TrendDirection::Up);
//! assert!((result.forecast.mean - 220.0).abs() < 1e-9);
//! ```

use crate::config::AnalysisOptions;
use crate::stats::{self, StatisticsSummary};
use crate::temporal::Frequency;
use crate::time_series::decomposition::{
    DecomposedState, SmoothingParams, StructuralDecomposer, MIN_DECOMPOSABLE_POINTS,
};
use crate::time_series::forecasting::{Forecast, Forecaster};
use crate::time_series::observation::{values_of, ObservationPoint};
use crate::time_series::trend::{TrendClassifier, TrendLabel};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything the engine knows about one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Frequency the series was analyzed at
    pub frequency: Frequency,
    /// Descriptive statistics and OLS fit of the raw values
    pub statistics: StatisticsSummary,
    /// Final smoothed level and slope
    #[serde(flatten)]
    pub decomposition: DecomposedState,
    /// Smoothing coefficients chosen by the grid search
    pub smoothing: SmoothingParams,
    /// Direction and strength label
    pub trend: TrendLabel,
    /// One-step-ahead forecast
    pub forecast: Forecast,
    /// Date the forecast refers to, when the series carried dates
    pub forecast_timestamp: Option<NaiveDate>,
}

impl AnalysisResult {
    /// Final smoothed level
    pub fn mu_smoothed(&self) -> f64 {
        self.decomposition.level
    }

    /// Final smoothed per-period slope
    pub fn beta_smoothed(&self) -> f64 {
        self.decomposition.slope
    }
}

/// Analyze a dated series
///
/// Returns `None` when the series is shorter than `options.min_points`
/// (never less than 2). A short history is expected for new or sparse
/// indicators and is not an error.
pub fn analyze(
    series: &[ObservationPoint],
    frequency: Frequency,
    options: &AnalysisOptions,
) -> Option<AnalysisResult> {
    let values = values_of(series);
    let mut result = analyze_values(&values, frequency, options)?;
    result.forecast_timestamp = series
        .last()
        .and_then(|last| frequency.advance(last.timestamp));
    Some(result)
}

/// Analyze a bare value array, oldest first
///
/// Same as [`analyze`] except that no forecast date can be derived.
pub fn analyze_values(
    values: &[f64],
    frequency: Frequency,
    options: &AnalysisOptions,
) -> Option<AnalysisResult> {
    let required = options.min_points.max(MIN_DECOMPOSABLE_POINTS);
    if values.len() < required {
        log::debug!(
            "insufficient history: {} points, {} required",
            values.len(),
            required
        );
        return None;
    }

    let statistics = stats::summarize(values);

    let fit = decomposer_for(frequency, options).decompose(values).ok()?;

    let trend = TrendClassifier::new(options.trend).classify(
        fit.state.slope,
        fit.state.residual_std_dev,
        statistics.r_squared,
        stats::mean_abs(values),
    );

    let forecast = Forecaster::new(options.non_negative).forecast(&fit.state, frequency);

    Some(AnalysisResult {
        frequency,
        statistics,
        decomposition: fit.state,
        smoothing: fit.params,
        trend,
        forecast,
        forecast_timestamp: None,
    })
}

/// Analyze many independent series in parallel
///
/// Output order matches input order and each element equals what
/// [`analyze`] returns for that series alone.
pub fn analyze_batch<S>(
    batch: &[(S, Frequency)],
    options: &AnalysisOptions,
) -> Vec<Option<AnalysisResult>>
where
    S: AsRef<[ObservationPoint]> + Sync,
{
    batch
        .par_iter()
        .map(|(series, frequency)| analyze(series.as_ref(), *frequency, options))
        .collect()
}

fn decomposer_for(frequency: Frequency, options: &AnalysisOptions) -> StructuralDecomposer {
    match options.grid_step {
        Some(step) => StructuralDecomposer::new(step).unwrap_or_else(|e| {
            log::warn!("{}; using the {} default grid", e, frequency);
            StructuralDecomposer::for_frequency(frequency)
        }),
        None => StructuralDecomposer::for_frequency(frequency),
    }
}

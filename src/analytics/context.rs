//! Trimmed analysis projection for downstream consumers
//!
//! The dashboard keeps a compact copy of each analyzed indicator so that
//! features outside the chart (such as a conversational assistant) can
//! reference it. Only the most recent points are kept alongside the scalar
//! results.

use crate::error::Result;
use crate::temporal::Frequency;
use crate::time_series::{AnalysisResult, ObservationPoint, TrendDirection, TrendStrength};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum number of recent observations carried in a context
pub const CONTEXT_POINT_LIMIT: usize = 50;

/// Compact, serializable view of one analyzed indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsContext {
    pub indicator: String,
    pub frequency: Frequency,
    /// Length of the full series before trimming
    pub total_points: usize,
    /// The last `CONTEXT_POINT_LIMIT` observations at most, oldest first
    pub recent_points: Vec<ObservationPoint>,
    pub mean: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub regression_slope: f64,
    pub r_squared: f64,
    pub mu_smoothed: f64,
    pub beta_smoothed: f64,
    pub direction: TrendDirection,
    pub strength: TrendStrength,
    pub forecast_mean: f64,
    pub forecast_p05: f64,
    pub forecast_p95: f64,
    pub forecast_timestamp: Option<NaiveDate>,
}

impl AnalyticsContext {
    /// Project an analysis result and its input series
    pub fn from_analysis(
        indicator: impl Into<String>,
        series: &[ObservationPoint],
        result: &AnalysisResult,
    ) -> Self {
        let start = series.len().saturating_sub(CONTEXT_POINT_LIMIT);
        let stats = &result.statistics;

        AnalyticsContext {
            indicator: indicator.into(),
            frequency: result.frequency,
            total_points: series.len(),
            recent_points: series[start..].to_vec(),
            mean: stats.mean,
            std_dev: stats.std_dev,
            coefficient_of_variation: stats.coefficient_of_variation,
            min: stats.min,
            max: stats.max,
            regression_slope: stats.slope,
            r_squared: stats.r_squared,
            mu_smoothed: result.mu_smoothed(),
            beta_smoothed: result.beta_smoothed(),
            direction: result.trend.direction,
            strength: result.trend.strength,
            forecast_mean: result.forecast.mean,
            forecast_p05: result.forecast.p05,
            forecast_p95: result.forecast.p95,
            forecast_timestamp: result.forecast_timestamp,
        }
    }

    /// Render as compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a context previously rendered with [`to_json`](Self::to_json)
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

//! Observation types consumed by the analysis pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated indicator value
///
/// Series handed to the analysis are expected to be strictly ascending by
/// `timestamp`, free of duplicates, and to hold only finite values.
/// Deduplication, regional aggregation and unit conversion happen upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub timestamp: NaiveDate,
    pub value: f64,
}

impl ObservationPoint {
    /// Create a new observation
    pub fn new(timestamp: NaiveDate, value: f64) -> Self {
        ObservationPoint { timestamp, value }
    }
}

/// Extract the values of a series in order
pub fn values_of(series: &[ObservationPoint]) -> Vec<f64> {
    series.iter().map(|p| p.value).collect()
}

/// Check the upstream contract: finite values, strictly ascending dates
///
/// The analysis path never calls this; it exists for callers and tests that
/// want to assert their own cleaning step.
pub fn is_well_formed(series: &[ObservationPoint]) -> bool {
    series.iter().all(|p| p.value.is_finite())
        && series.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
}

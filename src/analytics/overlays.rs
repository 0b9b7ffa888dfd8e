//! Chart overlay series derived from an analysis

use crate::stats::{LinearTrend, StatisticsSummary};
use crate::temporal::moving_average;
use serde::{Deserialize, Serialize};

/// Default trailing window for the moving-average overlay
pub const DEFAULT_MA_WINDOW: usize = 3;

/// Lines drawn on top of an indicator chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOverlays {
    /// OLS trend line evaluated at every observation index
    pub trend_line: Vec<f64>,
    /// Trailing moving average; leading slots without full history are `None`
    pub moving_average: Vec<Option<f64>>,
    /// Horizontal reference line at the series mean
    pub mean_line: f64,
    /// Window used for `moving_average`
    pub window: usize,
}

impl ChartOverlays {
    /// Build overlays for `values` using an already computed summary
    pub fn build(values: &[f64], summary: &StatisticsSummary, window: usize) -> Self {
        let trend = LinearTrend {
            slope: summary.slope,
            intercept: summary.intercept,
            r_squared: summary.r_squared,
        };

        ChartOverlays {
            trend_line: (0..values.len()).map(|i| trend.predict(i as f64)).collect(),
            moving_average: moving_average(values, window),
            mean_line: summary.mean,
            window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::summarize;

    #[test]
    fn test_overlays_for_linear_series() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = summarize(&values);
        let overlays = ChartOverlays::build(&values, &summary, DEFAULT_MA_WINDOW);

        assert_eq!(overlays.trend_line.len(), values.len());
        for (fitted, actual) in overlays.trend_line.iter().zip(values.iter()) {
            assert!((fitted - actual).abs() < 1e-10);
        }
        assert_eq!(
            overlays.moving_average,
            vec![None, None, Some(2.0), Some(3.0), Some(4.0)]
        );
        assert_eq!(overlays.mean_line, 3.0);
    }

    #[test]
    fn test_moving_average_slots_serialize_as_null() {
        let values = [10.0, 20.0];
        let summary = summarize(&values);
        let overlays = ChartOverlays::build(&values, &summary, 2);
        let json = serde_json::to_value(&overlays).unwrap();
        assert!(json["moving_average"][0].is_null());
        assert_eq!(json["moving_average"][1], 15.0);
    }
}

//! Presentation projections of an analysis
//!
//! The engine in [`crate::time_series`] returns plain values. This module
//! derives what the dashboard draws and stores from them:
//!
//! - Chart overlays (trend line, moving average, mean reference line)
//! - Badge text for trend labels and statistics
//! - A trimmed context record for consumers outside the chart
//!
//! # Example
//!
//! ```rust
//! use chrono::{Months, NaiveDate};
//! use trendcast::analytics::{format_badge, AnalyticsContext, ChartOverlays};
//! use trendcast::{analyze, AnalysisOptions, Frequency, ObservationPoint};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let values: Vec<f64> = (0..12).map(|i| 100.0 + 10.0 * i as f64).collect();
//! let series: Vec<ObservationPoint> = values
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| {
//!         let date = start.checked_add_months(Months::new(i as u32)).unwrap();
//!         ObservationPoint::new(date, v)
//!     })
//!     .collect();
//! let options = AnalysisOptions::default();
//!
//! let result = analyze(&series, Frequency::Monthly, &options).unwrap();
//! assert_eq!(format_badge(&result.trend), "↑ strong");
//!
//! let overlays = ChartOverlays::build(&values, &result.statistics, 3);
//! assert_eq!(overlays.trend_line.len(), values.len());
//!
//! let ctx = AnalyticsContext::from_analysis("cpi", &series, &result);
//! assert_eq!(ctx.total_points, 12);
//! ```

pub mod context;
pub mod overlays;

pub use context::{AnalyticsContext, CONTEXT_POINT_LIMIT};
pub use overlays::{ChartOverlays, DEFAULT_MA_WINDOW};

use crate::time_series::{TrendDirection, TrendLabel};

/// Arrow glyph for a trend direction
pub fn direction_symbol(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "↑",
        TrendDirection::Down => "↓",
        TrendDirection::Stable => "→",
    }
}

/// Short badge text such as `"↑ strong"`
pub fn format_badge(label: &TrendLabel) -> String {
    format!("{} {}", direction_symbol(label.direction), label.strength)
}

/// Format a coefficient of variation, `"n/a"` when undefined
pub fn format_cv(cv: Option<f64>) -> String {
    match cv {
        Some(value) => format!("{:.1}%", value),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_series::TrendStrength;

    #[test]
    fn test_format_badge() {
        let label = TrendLabel {
            direction: TrendDirection::Down,
            strength: TrendStrength::Moderate,
        };
        assert_eq!(format_badge(&label), "↓ moderate");
    }

    #[test]
    fn test_format_cv() {
        assert_eq!(format_cv(Some(12.345)), "12.3%");
        assert_eq!(format_cv(None), "n/a");
    }
}

//! # trendcast
//!
//! Deterministic trend and forecast engine for dashboard indicators.
//!
//! Given a chronological, pre-cleaned series and its frequency, the engine
//! produces descriptive statistics, a smoothed level/slope decomposition, a
//! direction/strength label and a one-step-ahead forecast with a 90% band.
//! Every call is a pure function of its input.
//!
//! ```rust
//! use trendcast::{analyze_values, AnalysisOptions, Frequency};
//!
//! let values = [50.0; 10];
//! let result = analyze_values(&values, Frequency::Monthly, &AnalysisOptions::default()).unwrap();
//! assert_eq!(result.statistics.coefficient_of_variation, Some(0.0));
//! assert!((result.forecast.mean - 50.0).abs() < 1e-9);
//! ```

#![allow(clippy::should_implement_trait)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod stats;
pub mod temporal;
pub mod time_series;

// Re-export commonly used types
pub use config::AnalysisOptions;
pub use error::{Error, Result};
pub use stats::StatisticsSummary;
pub use temporal::Frequency;
pub use time_series::{
    analyze, analyze_batch, analyze_values, AnalysisResult, DecomposedState, Forecast,
    ObservationPoint, TrendDirection, TrendLabel, TrendStrength,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

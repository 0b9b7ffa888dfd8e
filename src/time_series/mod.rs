//! Structural trend and forecast engine
//!
//! This module turns a chronological indicator series into summary
//! statistics, a smoothed level/slope decomposition, a trend label and a
//! one-step-ahead forecast.
//!
//! # Pipeline
//!
//! - [`stats::summarize`](crate::stats::summarize): descriptive statistics and OLS trend
//! - [`StructuralDecomposer`]: grid-searched local-linear-trend smoothing
//! - [`TrendClassifier`]: direction and strength label
//! - [`Forecaster`]: one-period projection with a 90% band
//! - [`analyze`]: runs the above and enforces the minimum-history guard

pub mod analysis;
pub mod decomposition;
pub mod forecasting;
pub mod observation;
pub mod trend;

pub use analysis::{analyze, analyze_batch, analyze_values, AnalysisResult};
pub use decomposition::{
    DecomposedState, SmoothingFit, SmoothingParams, StructuralDecomposer,
    MIN_DECOMPOSABLE_POINTS,
};
pub use forecasting::{Forecast, Forecaster, Z_90};
pub use observation::{is_well_formed, values_of, ObservationPoint};
pub use trend::{TrendClassifier, TrendDirection, TrendLabel, TrendStrength, TrendThresholds};

//! Analysis options and their file/string loaders
//!
//! Options can be built in code with the builder-style setters or loaded from
//! TOML, YAML or JSON. Missing keys take their defaults:
//!
//! ```toml
//! min_points = 10
//! non_negative = true
//!
//! [trend]
//! stable_epsilon = 0.0005
//! snr_strong = 0.5
//! ```

use crate::error::{Error, Result};
use crate::time_series::TrendThresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum history required before a series is analyzed
pub const DEFAULT_MIN_POINTS: usize = 10;

/// Tunable parameters of an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Series shorter than this yield no analysis
    pub min_points: usize,
    /// Clip the lower forecast band at zero
    pub non_negative: bool,
    /// Overrides the frequency-derived smoothing grid step
    pub grid_step: Option<f64>,
    /// Trend label cut-offs
    pub trend: TrendThresholds,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            min_points: DEFAULT_MIN_POINTS,
            non_negative: false,
            grid_step: None,
            trend: TrendThresholds::default(),
        }
    }
}

impl AnalysisOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum series length
    pub fn min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Declare the indicator's domain non-negative
    pub fn non_negative(mut self, non_negative: bool) -> Self {
        self.non_negative = non_negative;
        self
    }

    /// Override the smoothing grid step
    pub fn grid_step(mut self, step: f64) -> Self {
        self.grid_step = Some(step);
        self
    }

    /// Replace the trend thresholds
    pub fn trend_thresholds(mut self, thresholds: TrendThresholds) -> Self {
        self.trend = thresholds;
        self
    }

    /// Check that every option is usable
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(ref e) = result {
            log::warn!("rejecting analysis options: {}", e);
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.min_points < 2 {
            return Err(Error::Config(format!(
                "min_points must be at least 2, got {}",
                self.min_points
            )));
        }

        if let Some(step) = self.grid_step {
            if !step.is_finite() || step <= 0.0 || step > 0.5 {
                return Err(Error::Config(format!(
                    "grid_step must be in (0, 0.5], got {}",
                    step
                )));
            }
        }

        let t = &self.trend;
        for (name, value) in [
            ("stable_epsilon", t.stable_epsilon),
            ("snr_strong", t.snr_strong),
            ("snr_weak", t.snr_weak),
            ("r_squared_strong", t.r_squared_strong),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if t.snr_weak > t.snr_strong {
            return Err(Error::Config(format!(
                "snr_weak ({}) must not exceed snr_strong ({})",
                t.snr_weak, t.snr_strong
            )));
        }

        if t.r_squared_strong > 1.0 {
            return Err(Error::Config(format!(
                "r_squared_strong must be at most 1, got {}",
                t.r_squared_strong
            )));
        }

        Ok(())
    }

    /// Parse and validate options from TOML
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let options: AnalysisOptions = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from YAML
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let options: AnalysisOptions = serde_yaml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from JSON
    pub fn from_json_str(s: &str) -> Result<Self> {
        let options: AnalysisOptions = serde_json::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a `.toml`, `.yaml`/`.yml` or `.json` file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let contents = std::fs::read_to_string(path)?;
        match extension.as_str() {
            "toml" => Self::from_toml_str(&contents),
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "json" => Self::from_json_str(&contents),
            other => Err(Error::Config(format!(
                "unsupported configuration format '{}' for {}",
                other,
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = AnalysisOptions::default();
        assert_eq!(options.min_points, DEFAULT_MIN_POINTS);
        assert!(!options.non_negative);
        assert!(options.grid_step.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = AnalysisOptions::new()
            .min_points(3)
            .non_negative(true)
            .grid_step(0.1);
        assert_eq!(options.min_points, 3);
        assert!(options.non_negative);
        assert_eq!(options.grid_step, Some(0.1));
    }

    #[test]
    fn test_rejects_tiny_minimum() {
        let err = AnalysisOptions::new().min_points(1).validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_bad_grid_step() {
        assert!(AnalysisOptions::new().grid_step(0.0).validate().is_err());
        assert!(AnalysisOptions::new().grid_step(0.6).validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_snr_thresholds() {
        let thresholds = TrendThresholds {
            snr_weak: 2.0,
            snr_strong: 1.0,
            ..TrendThresholds::default()
        };
        let options = AnalysisOptions::new().trend_thresholds(thresholds);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options = AnalysisOptions::from_toml_str("min_points = 3\n").unwrap();
        assert_eq!(options.min_points, 3);
        assert_eq!(options.trend, TrendThresholds::default());
    }

    #[test]
    fn test_nested_yaml() {
        let yaml = "non_negative: true\ntrend:\n  snr_strong: 0.8\n";
        let options = AnalysisOptions::from_yaml_str(yaml).unwrap();
        assert!(options.non_negative);
        assert_eq!(options.trend.snr_strong, 0.8);
        assert_eq!(options.trend.snr_weak, TrendThresholds::default().snr_weak);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            AnalysisOptions::from_json_str("{\"min_points\": 0}"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AnalysisOptions::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }
}

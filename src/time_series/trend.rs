//! Discrete trend labels
//!
//! Direction comes from the smoothed slope relative to the series magnitude.
//! Strength needs two corroborating signals: a high slope-to-noise ratio
//! *and* a good linear fit. A short, accidentally monotonic run of noise can
//! reach one of them but rarely both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor for the noise estimate in the signal-to-noise ratio
const NOISE_FLOOR: f64 = 1e-12;

/// Direction of the current trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Confidence in the current trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStrength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

impl fmt::Display for TrendStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendStrength::Weak => write!(f, "weak"),
            TrendStrength::Moderate => write!(f, "moderate"),
            TrendStrength::Strong => write!(f, "strong"),
        }
    }
}

/// Direction and strength of a series' trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrendLabel {
    pub direction: TrendDirection,
    pub strength: TrendStrength,
}

/// Cut-offs used by [`TrendClassifier`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendThresholds {
    /// Slopes smaller than `stable_epsilon * mean(|y|)` are stable
    pub stable_epsilon: f64,
    /// Signal-to-noise ratio above which a trend may be strong
    pub snr_strong: f64,
    /// Signal-to-noise ratio below which a trend is weak
    pub snr_weak: f64,
    /// Minimum OLS R² for a strong trend
    pub r_squared_strong: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        TrendThresholds {
            stable_epsilon: 0.0005,
            snr_strong: 0.5,
            snr_weak: 0.1,
            r_squared_strong: 0.6,
        }
    }
}

/// Maps a decomposition and regression fit to a [`TrendLabel`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrendClassifier {
    thresholds: TrendThresholds,
}

impl TrendClassifier {
    /// Create a classifier with custom thresholds
    pub fn new(thresholds: TrendThresholds) -> Self {
        TrendClassifier { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &TrendThresholds {
        &self.thresholds
    }

    /// Classify a smoothed slope
    ///
    /// `mean_abs` is the mean absolute value of the series; it scales the
    /// stability band so that tiny drift on a large-magnitude series is not
    /// reported as a trend.
    pub fn classify(
        &self,
        slope: f64,
        residual_std_dev: f64,
        r_squared: f64,
        mean_abs: f64,
    ) -> TrendLabel {
        TrendLabel {
            direction: self.direction(slope, mean_abs),
            strength: self.strength(slope, residual_std_dev, r_squared),
        }
    }

    fn direction(&self, slope: f64, mean_abs: f64) -> TrendDirection {
        let band = self.thresholds.stable_epsilon * mean_abs;
        if slope == 0.0 || slope.abs() < band {
            TrendDirection::Stable
        } else if slope > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    fn strength(&self, slope: f64, residual_std_dev: f64, r_squared: f64) -> TrendStrength {
        let snr = slope.abs() / residual_std_dev.max(NOISE_FLOOR);
        log::trace!("trend snr={:.4} r2={:.4}", snr, r_squared);

        let t = &self.thresholds;
        if snr > t.snr_strong && r_squared > t.r_squared_strong {
            TrendStrength::Strong
        } else if snr < t.snr_weak {
            TrendStrength::Weak
        } else {
            TrendStrength::Moderate
        }
    }
}

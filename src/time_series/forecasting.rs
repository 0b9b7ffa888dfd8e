//! One-step-ahead forecasting from a decomposed state

use crate::temporal::Frequency;
use crate::time_series::decomposition::DecomposedState;
use serde::{Deserialize, Serialize};

/// Standard normal quantile for a two-sided 90% interval
pub const Z_90: f64 = 1.645;

/// Point forecast with a 90% band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Point forecast, `level + slope`
    pub mean: f64,
    /// 5th percentile
    pub p05: f64,
    /// 95th percentile
    pub p95: f64,
}

impl Forecast {
    /// Distance between the band edges
    pub fn band_width(&self) -> f64 {
        self.p95 - self.p05
    }
}

/// Projects one native period ahead of the last observation
///
/// The band half-width is `Z_90 * residual_std_dev` and assumes roughly normal
/// one-step-ahead errors. Multi-step horizons are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Forecaster {
    non_negative: bool,
}

impl Forecaster {
    /// Create a forecaster; `non_negative` clips the lower band at zero
    ///
    /// Only the caller knows whether an indicator's domain is non-negative;
    /// nothing is inferred from the data.
    pub fn new(non_negative: bool) -> Self {
        Forecaster { non_negative }
    }

    /// Whether the lower band is clipped at zero
    pub fn is_non_negative(&self) -> bool {
        self.non_negative
    }

    /// Forecast the next period of a series sampled at `frequency`
    pub fn forecast(&self, state: &DecomposedState, frequency: Frequency) -> Forecast {
        let mean = state.level + state.slope;
        let half_width = Z_90 * state.residual_std_dev;

        let mut p05 = mean - half_width;
        if self.non_negative {
            p05 = p05.max(0.0);
        }

        log::trace!(
            "one-step {} forecast mean={:.4} half_width={:.4}",
            frequency,
            mean,
            half_width
        );

        Forecast {
            mean,
            p05,
            p95: mean + half_width,
        }
    }
}

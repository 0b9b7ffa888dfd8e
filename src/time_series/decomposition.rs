//! Local-linear-trend decomposition
//!
//! Fits Holt's double exponential smoother to a series and reports the final
//! smoothed level and slope together with the spread of the one-step-ahead
//! fitting errors.
//!
//! ```text
//! Level:  L_t = α y_t + (1 - α)(L_{t-1} + T_{t-1})
//! Slope:  T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Error:  e_t = y_t - (L_{t-1} + T_{t-1})
//! ```
//!
//! with `L_0 = y_0` and `T_0 = y_1 - y_0`. The smoothing coefficients are
//! picked by an exhaustive grid search minimizing `Σ e_t²`.

use crate::error::{Error, Result};
use crate::stats::population_std_dev;
use crate::temporal::Frequency;
use serde::{Deserialize, Serialize};

/// Smallest series the smoother can be initialized from
pub const MIN_DECOMPOSABLE_POINTS: usize = 2;

/// Final smoothed state of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecomposedState {
    /// Most recent smoothed level
    #[serde(rename = "mu_smoothed")]
    pub level: f64,
    /// Most recent smoothed per-period slope
    #[serde(rename = "beta_smoothed")]
    pub slope: f64,
    /// Population standard deviation of the one-step-ahead errors
    pub residual_std_dev: f64,
}

/// Smoothing coefficients selected by the grid search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    /// Level smoothing coefficient
    pub alpha: f64,
    /// Slope smoothing coefficient
    pub beta: f64,
    /// Sum of squared one-step-ahead errors at these coefficients
    pub sse: f64,
}

/// Outcome of a decomposition: the final state plus how it was fitted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingFit {
    pub state: DecomposedState,
    pub params: SmoothingParams,
}

/// Grid-searched double exponential smoother
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralDecomposer {
    /// Distance between neighbouring candidate coefficients
    grid_step: f64,
}

impl StructuralDecomposer {
    /// Create a decomposer with an explicit grid step in `(0, 0.5]`
    pub fn new(grid_step: f64) -> Result<Self> {
        if !grid_step.is_finite() || grid_step <= 0.0 || grid_step > 0.5 {
            return Err(Error::InvalidValue(format!(
                "grid step must be in (0, 0.5], got {}",
                grid_step
            )));
        }
        Ok(StructuralDecomposer { grid_step })
    }

    /// Create a decomposer with the granularity suited to `frequency`
    pub fn for_frequency(frequency: Frequency) -> Self {
        StructuralDecomposer {
            grid_step: frequency.grid_step(),
        }
    }

    /// Grid step in use
    pub fn grid_step(&self) -> f64 {
        self.grid_step
    }

    /// Candidate coefficients, ascending, strictly inside `(0, 1)`
    ///
    /// Points are `k * step`, never accumulated by repeated addition.
    pub fn grid(&self) -> Vec<f64> {
        let upper = 1.0 - self.grid_step * 0.5;
        (1..)
            .map(|k| k as f64 * self.grid_step)
            .take_while(|&c| c < upper)
            .collect()
    }

    /// Fit the smoother, selecting `(α, β)` by grid search
    ///
    /// Ties keep the earliest candidate in (α ascending, β ascending) order.
    pub fn decompose(&self, values: &[f64]) -> Result<SmoothingFit> {
        check_length(values)?;

        let grid = self.grid();
        let mut best: Option<(f64, f64, f64)> = None;
        for &alpha in &grid {
            for &beta in &grid {
                let sse = sum_squared_errors(values, alpha, beta);
                match best {
                    Some((_, _, best_sse)) if sse >= best_sse => {}
                    _ => best = Some((alpha, beta, sse)),
                }
            }
        }

        let (alpha, beta, _) = best.ok_or_else(|| {
            Error::InvalidValue(format!("empty smoothing grid for step {}", self.grid_step))
        })?;

        let fit = smooth(values, alpha, beta);
        log::debug!(
            "selected alpha={:.3} beta={:.3} sse={:.6} over {} points ({} candidates)",
            fit.params.alpha,
            fit.params.beta,
            fit.params.sse,
            values.len(),
            grid.len() * grid.len()
        );
        Ok(fit)
    }

    /// Run the smoother with fixed coefficients, without any search
    pub fn smooth_with(&self, values: &[f64], alpha: f64, beta: f64) -> Result<SmoothingFit> {
        check_length(values)?;
        for (name, c) in [("alpha", alpha), ("beta", beta)] {
            if !c.is_finite() || c <= 0.0 || c >= 1.0 {
                return Err(Error::InvalidValue(format!(
                    "{} must be in (0, 1), got {}",
                    name, c
                )));
            }
        }
        Ok(smooth(values, alpha, beta))
    }
}

fn check_length(values: &[f64]) -> Result<()> {
    if values.len() < MIN_DECOMPOSABLE_POINTS {
        return Err(Error::InsufficientData(format!(
            "decomposition needs at least {} points, got {}",
            MIN_DECOMPOSABLE_POINTS,
            values.len()
        )));
    }
    Ok(())
}

/// Allocation-free pass used inside the grid search
fn sum_squared_errors(values: &[f64], alpha: f64, beta: f64) -> f64 {
    let mut level = values[0];
    let mut slope = values[1] - values[0];
    let mut sse = 0.0;

    for &y in &values[1..] {
        let predicted = level + slope;
        let error = y - predicted;
        sse += error * error;

        let next_level = alpha * y + (1.0 - alpha) * predicted;
        slope = beta * (next_level - level) + (1.0 - beta) * slope;
        level = next_level;
    }

    sse
}

fn smooth(values: &[f64], alpha: f64, beta: f64) -> SmoothingFit {
    let mut level = values[0];
    let mut slope = values[1] - values[0];
    let mut errors = Vec::with_capacity(values.len() - 1);

    for &y in &values[1..] {
        let predicted = level + slope;
        errors.push(y - predicted);

        let next_level = alpha * y + (1.0 - alpha) * predicted;
        slope = beta * (next_level - level) + (1.0 - beta) * slope;
        level = next_level;
    }

    let sse = errors.iter().map(|e| e * e).sum();

    SmoothingFit {
        state: DecomposedState {
            level,
            slope,
            residual_std_dev: population_std_dev(&errors),
        },
        params: SmoothingParams { alpha, beta, sse },
    }
}

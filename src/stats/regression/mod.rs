// Ordinary least squares trend fitting

use serde::{Deserialize, Serialize};

/// Result of a simple OLS fit `y ≈ slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    /// Change in `y` per unit of `x`
    pub slope: f64,
    /// Fitted value at `x = 0`
    pub intercept: f64,
    /// Coefficient of determination, in `[0, 1]`
    pub r_squared: f64,
}

impl LinearTrend {
    /// Fitted value at position `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line against the observation index `0..n-1`
///
/// An empty slice fits the zero line.
pub fn linear_trend(values: &[f64]) -> LinearTrend {
    fit(values.iter().enumerate().map(|(i, &y)| (i as f64, y)), values.len())
}

/// Fit a line through arbitrary `(x, y)` pairs
///
/// When `x` has no spread the slope is 0 and the intercept is the mean of `y`.
pub fn linear_trend_xy(points: &[(f64, f64)]) -> LinearTrend {
    fit(points.iter().copied(), points.len())
}

fn fit<I>(points: I, n: usize) -> LinearTrend
where
    I: Iterator<Item = (f64, f64)> + Clone,
{
    if n == 0 {
        return LinearTrend {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
        };
    }

    let nf = n as f64;
    let (sum_x, sum_y) = points
        .clone()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let mean_x = sum_x / nf;
    let mean_y = sum_y / nf;

    let (sxx, sxy, ss_tot, sum_abs_y) =
        points
            .clone()
            .fold((0.0, 0.0, 0.0, 0.0), |(sxx, sxy, syy, ay), (x, y)| {
                let dx = x - mean_x;
                let dy = y - mean_y;
                (sxx + dx * dx, sxy + dx * dy, syy + dy * dy, ay + y.abs())
            });

    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = mean_y - slope * mean_x;

    // A constant series has no variance to explain. Centering leaves each
    // deviation off by at most ε·Σ|y|, so anything below that is noise.
    let centering_noise = f64::EPSILON * sum_abs_y;
    let r_squared = if ss_tot <= nf * centering_noise * centering_noise {
        0.0
    } else {
        let ss_res: f64 = points
            .map(|(x, y)| {
                let residual = y - (slope * x + intercept);
                residual * residual
            })
            .sum();
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    };

    LinearTrend {
        slope,
        intercept,
        r_squared,
    }
}

//! Common test fixtures
//!
//! Provides shared series builders for integration tests.

#![allow(dead_code)]

use chrono::{Days, Months, NaiveDate};
use trendcast::ObservationPoint;

/// First observation date used by every fixture
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

/// Wrap values into a monthly series starting at `start_date()`
pub fn monthly_series(values: &[f64]) -> Vec<ObservationPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let date = start_date()
                .checked_add_months(Months::new(i as u32))
                .unwrap();
            ObservationPoint::new(date, v)
        })
        .collect()
}

/// Wrap values into a daily series starting at `start_date()`
pub fn daily_series(values: &[f64]) -> Vec<ObservationPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let date = start_date().checked_add_days(Days::new(i as u64)).unwrap();
            ObservationPoint::new(date, v)
        })
        .collect()
}

/// `100, 110, ..., 210`
pub fn monotonic_values() -> Vec<f64> {
    (0..12).map(|i| 100.0 + 10.0 * i as f64).collect()
}

/// Zero-drift noise around 50, optionally with one large spike at `spike_at`
pub fn noisy_flat_values(spike_at: Option<usize>) -> Vec<f64> {
    let pattern = [3.0, -2.0, 1.0, -3.0, 2.0, -1.0];
    let mut values: Vec<f64> = (0..36).map(|i| 50.0 + pattern[i % pattern.len()]).collect();
    if let Some(index) = spike_at {
        values[index] += 40.0;
    }
    values
}

/// Values oscillating around zero whose sum does not cancel exactly
pub fn inexact_zero_mean_values() -> Vec<f64> {
    [-330.3, 110.1, 220.2].repeat(4)
}

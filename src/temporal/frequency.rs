use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Native sampling frequency of an indicator series
///
/// The frequency decides how far ahead a forecast reaches (always exactly one
/// native period) and how fine the smoothing grid search is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One observation per day
    Daily,
    /// One observation per calendar month
    Monthly,
    /// One observation per calendar quarter
    Quarterly,
    /// One observation per year
    #[serde(alias = "yearly")]
    Annual,
}

impl Frequency {
    /// Parse a frequency from a string alias
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "D" | "DAY" | "DAYS" | "DAILY" => Some(Frequency::Daily),
            "M" | "MONTH" | "MONTHS" | "MONTHLY" => Some(Frequency::Monthly),
            "Q" | "QUARTER" | "QUARTERS" | "QUARTERLY" => Some(Frequency::Quarterly),
            "Y" | "YEAR" | "YEARS" | "A" | "ANNUAL" | "ANNUALLY" | "YEARLY" => {
                Some(Frequency::Annual)
            }
            _ => None,
        }
    }

    /// Approximate number of native periods in a year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Daily => 365,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::Annual => 1,
        }
    }

    /// Step between candidate smoothing coefficients in the grid search
    ///
    /// Daily series are long, so a coarser grid keeps the fit cheap; annual
    /// series are short, so a finer grid is affordable.
    pub fn grid_step(&self) -> f64 {
        match self {
            Frequency::Daily => 0.10,
            Frequency::Monthly | Frequency::Quarterly => 0.05,
            Frequency::Annual => 0.025,
        }
    }

    /// Date one native period after `date`
    ///
    /// Month arithmetic is calendar-aware: advancing January 31st by one
    /// month yields the last day of February. Returns `None` on overflow.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => date.checked_add_days(Days::new(1)),
            Frequency::Monthly => date.checked_add_months(Months::new(1)),
            Frequency::Quarterly => date.checked_add_months(Months::new(3)),
            Frequency::Annual => date.checked_add_months(Months::new(12)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "D"),
            Frequency::Monthly => write!(f, "M"),
            Frequency::Quarterly => write!(f, "Q"),
            Frequency::Annual => write!(f, "A"),
        }
    }
}

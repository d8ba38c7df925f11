//! Invoice period model.
//!
//! This module contains the [`InvoicePeriod`] type that bounds which time
//! entries belong on an invoice.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date range an invoice covers.
///
/// # Example
///
/// ```
/// use overtime_billing::models::InvoicePeriod;
/// use chrono::NaiveDate;
///
/// let period = InvoicePeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePeriod {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl InvoicePeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Rejects periods whose end date precedes the start date.
    ///
    /// A single-day period (start equals end) is valid.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Returns a display label such as `2026-01-01 to 2026-01-31`.
    pub fn label(&self) -> String {
        format!("{} to {}", self.start_date, self.end_date)
    }
}

//! Core data models for the Overtime Billing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod invoice_period;
mod line_item;
mod request;
mod snapshot;
mod time_entry;
mod totals;
mod week;

pub use calculation_result::{
    CalculationWarning, InvoiceCalculation, Severity, WARN_ALL_ENTRIES_EXCLUDED,
    WARN_CONTRACT_DEFAULT_RATE_USED,
    WARN_ENTRY_EMPLOYEE_MISMATCH, WARN_ENTRY_OUTSIDE_PERIOD, WARN_FALLBACK_RATE_USED,
    WARN_INVALID_ENTRY_DATE, WARN_MIXED_RATES_IN_WEEK, WARN_NEGATIVE_HOURS_IGNORED,
};
pub use employee::Employee;
pub use invoice_period::InvoicePeriod;
pub use line_item::{LineItem, LineItemType};
pub use request::{EmployeeTimesheet, InvoiceRequest};
pub use snapshot::InvoiceSnapshot;
pub use time_entry::{MAX_ENTRY_YEAR, MIN_ENTRY_YEAR, TimeEntry};
pub use totals::{BillingTotals, EmployeeAggregate, InvoiceTotals};
pub use week::{RateSource, WeekBucket, WeekCalculation, WeekKey};

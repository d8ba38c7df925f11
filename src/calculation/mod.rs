//! Calculation logic for the Overtime Billing Engine.
//!
//! This module contains the pure calculation pipeline: calendar week
//! bucketing, billing rate resolution, weekly tiered overtime pricing,
//! employee and invoice rollups with reconciliation, and line item
//! projection for the document renderer.

mod arithmetic;
mod employee_aggregator;
mod invoice_aggregator;
mod line_items;
mod overtime;
mod pipeline;
mod rate_policy;
mod rounding;
mod week_bucketer;

pub(crate) use arithmetic::{checked_add, checked_mul};
pub use employee_aggregator::{PricedWeeks, aggregate_employee, build_week_buckets};
pub use invoice_aggregator::{aggregate_invoice, reconcile};
pub use line_items::{project_employee_line_items, project_line_items};
pub use overtime::{
    NORMAL_COEFFICIENT, NORMAL_HOURS_LIMIT, TIER1_COEFFICIENT, TIER1_HOURS_LIMIT,
    TIER2_COEFFICIENT, TierHours, WeekCalculationResult, calculate_week, split_week_hours,
};
pub use pipeline::{EmployeeCalculation, calculate_employee, calculate_invoice};
pub use rate_policy::{DEFAULT_FALLBACK_RATE, RatePolicy, RateResolution};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use week_bucketer::{BucketedEntries, bucket_entries};

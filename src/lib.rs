//! Overtime Billing Engine
//!
//! This crate turns raw daily time-tracking entries into invoice line items
//! with tiered weekly overtime: normal hours, a first overtime tier at 125%
//! and a second overtime tier at 150%. It buckets entries by calendar week,
//! prices each week, rolls weeks up per employee and per invoice, and
//! projects the result into billable line items for a document renderer.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

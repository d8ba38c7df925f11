//! Calendar week models.
//!
//! This module contains the [`WeekKey`] used to bucket time entries, the
//! [`WeekBucket`] holding one week's entries, and the [`WeekCalculation`]
//! priced breakdown computed for that week.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MAX_ENTRY_YEAR, MIN_ENTRY_YEAR, TimeEntry};

/// Identifies one ISO-8601 calendar week.
///
/// The key is anchored on the Monday of the week, so ordering keys orders
/// weeks chronologically. Its text form is `YYYY-Www` (e.g. `2026-W03`),
/// which sorts lexicographically in the same order for ISO years 1 to 9999.
/// [`TimeEntry::parse_date`] rejects dates outside that range, so every key
/// built from an entry has a four-digit year. A week that straddles a month
/// or year boundary is a single key.
///
/// # Example
///
/// ```
/// use overtime_billing::models::WeekKey;
/// use chrono::NaiveDate;
///
/// // Wednesday 31 December 2025 and Friday 2 January 2026 share ISO week 2026-W01.
/// let dec_31 = WeekKey::from_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
/// let jan_2 = WeekKey::from_date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
/// assert_eq!(dec_31, jan_2);
/// assert_eq!(dec_31.to_string(), "2026-W01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct WeekKey {
    monday: NaiveDate,
}

impl WeekKey {
    /// Returns the key of the week containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday() as i64;
        Self {
            monday: date - Duration::days(offset),
        }
    }

    /// The Monday that opens this week.
    pub fn first_day(&self) -> NaiveDate {
        self.monday
    }

    /// The Sunday that closes this week.
    pub fn last_day(&self) -> NaiveDate {
        self.monday + Duration::days(6)
    }

    /// Display label for the week's date range, e.g. `2026-01-12 to 2026-01-18`.
    pub fn period_label(&self) -> String {
        format!("{} to {}", self.first_day(), self.last_day())
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = self.monday.iso_week();
        write!(f, "{:04}-W{:02}", iso.year(), iso.week())
    }
}

impl FromStr for WeekKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid week key '{}', expected YYYY-Www", s);

        let (year, week) = s.split_once("-W").ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        if !(MIN_ENTRY_YEAR..=MAX_ENTRY_YEAR).contains(&year) {
            return Err(invalid());
        }
        let week: u32 = week.parse().map_err(|_| invalid())?;

        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .map(|monday| Self { monday })
            .ok_or_else(invalid)
    }
}

impl From<WeekKey> for String {
    fn from(key: WeekKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for WeekKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where a week's billing rate came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The rate carried on the first entry of the week.
    Entry,
    /// The contract's configured default rate.
    ContractDefault,
    /// The policy's fixed fallback rate.
    Fallback,
    /// No rate was needed because the week had no entries.
    #[default]
    None,
}

/// The priced breakdown of one week's hours.
///
/// Amounts keep full precision; rounding happens only when displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCalculation {
    /// Sum of the week's entry hours.
    pub total_week_hours: Decimal,
    /// Hours billed at the normal rate (first 35).
    pub normal_hours: Decimal,
    /// Hours billed at 125% (hours 35 to 43).
    pub overtime125: Decimal,
    /// Hours billed at 150% (beyond 43).
    pub overtime150: Decimal,
    /// Amount for normal hours.
    pub normal_amount: Decimal,
    /// Amount for the 125% tier.
    pub overtime125_amount: Decimal,
    /// Amount for the 150% tier.
    pub overtime150_amount: Decimal,
    /// Sum of the three tier amounts.
    pub total_week_amount: Decimal,
    /// The single rate applied to every tier of the week.
    pub average_billing_rate: Decimal,
    /// How `average_billing_rate` was resolved.
    pub rate_source: RateSource,
}

/// One calendar week of an employee's entries with its computed breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// The week this bucket covers.
    pub key: WeekKey,
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Sunday of the week.
    pub week_end: NaiveDate,
    /// The week's entries ordered by date, then start time.
    pub entries: Vec<TimeEntry>,
    /// The priced breakdown of the week.
    pub calculation: WeekCalculation,
}

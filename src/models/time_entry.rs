//! Time entry model.
//!
//! A [`TimeEntry`] is one worked period as handed over by the time-tracking
//! store. The date is kept as the raw text the store supplied so that a
//! malformed value can be reported instead of silently coerced.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Earliest calendar year accepted on an entry.
pub const MIN_ENTRY_YEAR: i32 = 1;

/// Latest calendar year accepted on an entry.
pub const MAX_ENTRY_YEAR: i32 = 9999;

/// Represents one worked period for an employee on a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Identifier of the entry in the time-tracking store.
    #[serde(default)]
    pub id: String,
    /// The employee who worked this period.
    pub employee_id: String,
    /// The contract the work is billed against.
    pub contract_id: String,
    /// Human-readable contract title, passed through to rendering.
    #[serde(default)]
    pub contract_title: String,
    /// The work date as supplied by the store (e.g. "2026-01-15").
    pub date: String,
    /// Clock-in time, informational only.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time, informational only.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Hours worked. Missing or negative values count as zero.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Client-facing hourly rate.
    #[serde(default)]
    pub billing_rate: Option<Decimal>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl TimeEntry {
    /// Parses the entry date.
    ///
    /// Accepts plain dates (`2026-01-15`), naive timestamps
    /// (`2026-01-15T09:00:00`) and RFC 3339 timestamps, of which only the
    /// date part is kept. Years outside 1 to 9999 are rejected so week keys
    /// keep their four-digit text form.
    ///
    /// # Examples
    ///
    /// ```
    /// use overtime_billing::models::TimeEntry;
    /// use chrono::NaiveDate;
    ///
    /// let mut entry = TimeEntry {
    ///     id: "te_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     contract_id: "ctr_001".to_string(),
    ///     contract_title: "Site maintenance".to_string(),
    ///     date: "2026-01-15".to_string(),
    ///     start_time: None,
    ///     end_time: None,
    ///     total_hours: None,
    ///     billing_rate: None,
    ///     notes: None,
    /// };
    /// assert_eq!(entry.parse_date().unwrap(), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    ///
    /// entry.date = "not a date".to_string();
    /// assert!(entry.parse_date().is_err());
    /// ```
    pub fn parse_date(&self) -> EngineResult<NaiveDate> {
        let raw = self.date.trim();

        let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                    .ok()
                    .map(|datetime| datetime.date())
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|datetime| datetime.date_naive())
            });

        match parsed {
            Some(date) if (MIN_ENTRY_YEAR..=MAX_ENTRY_YEAR).contains(&date.year()) => Ok(date),
            _ => Err(EngineError::InvalidEntryDate {
                entry_id: self.id.clone(),
                value: self.date.clone(),
            }),
        }
    }

    /// Returns the hours this entry contributes to its week.
    ///
    /// Missing and negative hour values contribute nothing.
    pub fn effective_hours(&self) -> Decimal {
        match self.total_hours {
            Some(hours) if hours > Decimal::ZERO => hours,
            _ => Decimal::ZERO,
        }
    }

    /// Returns true if the entry carries a negative hour value.
    pub fn has_negative_hours(&self) -> bool {
        self.total_hours.is_some_and(|hours| hours < Decimal::ZERO)
    }

    /// Returns the entry's billing rate if it is present and positive.
    pub fn usable_billing_rate(&self) -> Option<Decimal> {
        self.billing_rate.filter(|rate| *rate > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_entry(date: &str) -> TimeEntry {
        TimeEntry {
            id: "te_001".to_string(),
            employee_id: "emp_001".to_string(),
            contract_id: "ctr_001".to_string(),
            contract_title: "Site maintenance".to_string(),
            date: date.to_string(),
            start_time: None,
            end_time: None,
            total_hours: Some(dec("8")),
            billing_rate: Some(dec("20")),
            notes: None,
        }
    }

    #[test]
    fn test_parse_plain_date() {
        let entry = make_entry("2026-01-15");
        assert_eq!(
            entry.parse_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_naive_timestamp_keeps_date() {
        let entry = make_entry("2026-01-15T22:30:00");
        assert_eq!(
            entry.parse_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339_keeps_local_date() {
        let entry = make_entry("2026-01-15T23:30:00+10:00");
        assert_eq!(
            entry.parse_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let entry = make_entry("  2026-01-15 ");
        assert!(entry.parse_date().is_ok());
    }

    #[test]
    fn test_unparsable_date_is_an_error() {
        for raw in ["", "15/01/2026", "2026-02-30", "yesterday"] {
            let entry = make_entry(raw);
            match entry.parse_date() {
                Err(EngineError::InvalidEntryDate { entry_id, value }) => {
                    assert_eq!(entry_id, "te_001");
                    assert_eq!(value, raw);
                }
                other => panic!("expected InvalidEntryDate for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_years_beyond_four_digits_are_rejected() {
        for raw in ["0000-06-15", "-0001-06-15", "+10000-01-01", "10000-01-01"] {
            assert!(make_entry(raw).parse_date().is_err(), "{} should be rejected", raw);
        }
        assert!(make_entry("0001-01-01").parse_date().is_ok());
        assert!(make_entry("9999-12-31").parse_date().is_ok());
    }

    #[test]
    fn test_effective_hours() {
        let mut entry = make_entry("2026-01-15");
        assert_eq!(entry.effective_hours(), dec("8"));

        entry.total_hours = None;
        assert_eq!(entry.effective_hours(), Decimal::ZERO);

        entry.total_hours = Some(dec("-3.5"));
        assert_eq!(entry.effective_hours(), Decimal::ZERO);
        assert!(entry.has_negative_hours());
    }

    #[test]
    fn test_usable_billing_rate_rejects_non_positive() {
        let mut entry = make_entry("2026-01-15");
        assert_eq!(entry.usable_billing_rate(), Some(dec("20")));

        entry.billing_rate = Some(Decimal::ZERO);
        assert_eq!(entry.usable_billing_rate(), None);

        entry.billing_rate = Some(dec("-5"));
        assert_eq!(entry.usable_billing_rate(), None);

        entry.billing_rate = None;
        assert_eq!(entry.usable_billing_rate(), None);
    }

    #[test]
    fn test_entry_deserialization_with_optional_fields_missing() {
        let json = r#"{
            "employee_id": "emp_001",
            "contract_id": "ctr_001",
            "date": "2026-01-15",
            "total_hours": "7.5"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "");
        assert_eq!(entry.total_hours, Some(dec("7.5")));
        assert_eq!(entry.billing_rate, None);
        assert_eq!(entry.start_time, None);
    }

    #[test]
    fn test_entry_serialization() {
        let mut entry = make_entry("2026-01-15");
        entry.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        entry.end_time = NaiveTime::from_hms_opt(17, 0, 0);

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: TimeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}

//! Calendar week bucketing.
//!
//! Groups one employee's time entries by ISO week. The caller restricts the
//! entries to the invoice period beforehand.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{CalculationWarning, Severity, TimeEntry, WARN_INVALID_ENTRY_DATE, WeekKey};

/// Entries grouped by week, plus warnings for entries that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketedEntries {
    /// Non-empty weeks in chronological order. Entries inside a week are
    /// ordered by date, then start time, keeping input order for ties.
    pub weeks: BTreeMap<WeekKey, Vec<TimeEntry>>,
    /// One warning per entry whose date could not be parsed.
    pub warnings: Vec<CalculationWarning>,
}

/// Groups entries into calendar-week buckets.
///
/// Entries with unparsable dates are dropped and reported; they are never
/// assigned to a guessed week. Weeks without entries do not appear.
///
/// # Example
///
/// ```
/// use overtime_billing::calculation::bucket_entries;
/// use overtime_billing::models::TimeEntry;
/// use rust_decimal::Decimal;
///
/// let entry = |id: &str, date: &str| TimeEntry {
///     id: id.to_string(),
///     employee_id: "emp_001".to_string(),
///     contract_id: "ctr_001".to_string(),
///     contract_title: "Site maintenance".to_string(),
///     date: date.to_string(),
///     start_time: None,
///     end_time: None,
///     total_hours: Some(Decimal::from(8)),
///     billing_rate: Some(Decimal::from(20)),
///     notes: None,
/// };
///
/// let bucketed = bucket_entries(&[
///     entry("te_1", "2026-01-20"),
///     entry("te_2", "2026-01-12"),
///     entry("te_3", "2026-01-14"),
///     entry("te_4", "garbage"),
/// ]);
///
/// let keys: Vec<String> = bucketed.weeks.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["2026-W03", "2026-W04"]);
/// assert_eq!(bucketed.warnings.len(), 1);
/// ```
pub fn bucket_entries(entries: &[TimeEntry]) -> BucketedEntries {
    let mut dated: Vec<(NaiveDate, &TimeEntry)> = Vec::with_capacity(entries.len());
    let mut warnings = Vec::new();

    for entry in entries {
        match entry.parse_date() {
            Ok(date) => dated.push((date, entry)),
            Err(err) => {
                warn!(
                    employee_id = %entry.employee_id,
                    entry_id = %entry.id,
                    date = %entry.date,
                    "Dropping time entry with unparsable date"
                );
                warnings.push(
                    CalculationWarning::new(WARN_INVALID_ENTRY_DATE, err.to_string(), Severity::Medium)
                        .for_employee(&entry.employee_id)
                        .for_entry(&entry.id),
                );
            }
        }
    }

    // Stable sort keeps input order for entries sharing a date and start time.
    dated.sort_by_key(|(date, entry)| (*date, entry.start_time));

    let mut weeks: BTreeMap<WeekKey, Vec<TimeEntry>> = BTreeMap::new();
    for (date, entry) in dated {
        weeks
            .entry(WeekKey::from_date(date))
            .or_default()
            .push(entry.clone());
    }

    BucketedEntries { weeks, warnings }
}

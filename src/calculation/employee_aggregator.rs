//! Per-employee rollup.
//!
//! Turns grouped entries into priced [`WeekBucket`]s and sums them into an
//! [`EmployeeAggregate`].

use std::collections::{BTreeMap, BTreeSet};

use crate::error::EngineResult;
use crate::models::{
    BillingTotals, CalculationWarning, Employee, EmployeeAggregate, TimeEntry, WeekBucket, WeekKey,
};

use super::{RatePolicy, calculate_week};

/// Priced week buckets for one employee, plus warnings raised while pricing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricedWeeks {
    /// Week buckets in chronological order.
    pub weekly_data: BTreeMap<WeekKey, WeekBucket>,
    /// Warnings from every week's calculation, in week order.
    pub warnings: Vec<CalculationWarning>,
}

/// Prices every grouped week.
pub fn build_week_buckets(
    grouped: BTreeMap<WeekKey, Vec<TimeEntry>>,
    policy: &RatePolicy,
) -> EngineResult<PricedWeeks> {
    let mut priced = PricedWeeks::default();

    for (key, entries) in grouped {
        let result = calculate_week(&entries, policy)?;
        priced.warnings.extend(result.warnings);
        priced.weekly_data.insert(
            key,
            WeekBucket {
                key,
                week_start: key.first_day(),
                week_end: key.last_day(),
                entries,
                calculation: result.calculation,
            },
        );
    }

    Ok(priced)
}

/// Sums an employee's weeks into an aggregate.
///
/// Weeks are visited in key order. `working_days` counts distinct entry
/// dates across all weeks. An employee without weeks gets all-zero totals.
pub fn aggregate_employee(
    employee: &Employee,
    weekly_data: BTreeMap<WeekKey, WeekBucket>,
) -> EngineResult<EmployeeAggregate> {
    let mut totals = BillingTotals::default();
    let mut dates = BTreeSet::new();

    for bucket in weekly_data.values() {
        totals.add_week(&bucket.calculation)?;
        dates.extend(bucket.entries.iter().filter_map(|e| e.parse_date().ok()));
    }
    totals.working_days = dates.len() as u32;

    Ok(EmployeeAggregate {
        employee_id: employee.id.clone(),
        employee: employee.clone(),
        weekly_data,
        totals,
    })
}

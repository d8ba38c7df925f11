//! Rollup models.
//!
//! [`BillingTotals`] carries the summed hour and amount fields at employee
//! and invoice level; [`EmployeeAggregate`] groups an employee's weeks with
//! their totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::checked_add;
use crate::error::EngineResult;

use super::{Employee, WeekBucket, WeekCalculation, WeekKey};

/// Summed hours and amounts over any number of weeks.
///
/// # Example
///
/// ```
/// use overtime_billing::models::{BillingTotals, WeekCalculation};
/// use rust_decimal::Decimal;
///
/// let mut totals = BillingTotals::default();
/// totals
///     .add_week(&WeekCalculation {
///         total_week_hours: Decimal::from(40),
///         total_week_amount: Decimal::from(825),
///         ..WeekCalculation::default()
///     })
///     .unwrap();
/// assert_eq!(totals.total_hours, Decimal::from(40));
/// assert_eq!(totals.total_amount, Decimal::from(825));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingTotals {
    /// Total hours worked.
    pub total_hours: Decimal,
    /// Hours at the normal rate.
    pub normal_hours: Decimal,
    /// Hours at 125%.
    pub overtime125: Decimal,
    /// Hours at 150%.
    pub overtime150: Decimal,
    /// Amount for normal hours.
    pub normal_amount: Decimal,
    /// Amount for the 125% tier.
    pub overtime125_amount: Decimal,
    /// Amount for the 150% tier.
    pub overtime150_amount: Decimal,
    /// Grand total amount.
    pub total_amount: Decimal,
    /// Count of distinct dates with at least one entry.
    pub working_days: u32,
}

/// Invoice-level totals: the field-wise sum of every employee's totals.
pub type InvoiceTotals = BillingTotals;

impl BillingTotals {
    /// Adds one week's hour and amount fields. Working days are counted separately.
    ///
    /// On overflow the totals are left unchanged.
    pub fn add_week(&mut self, week: &WeekCalculation) -> EngineResult<()> {
        *self = BillingTotals {
            total_hours: checked_add(self.total_hours, week.total_week_hours, "total_hours")?,
            normal_hours: checked_add(self.normal_hours, week.normal_hours, "normal_hours")?,
            overtime125: checked_add(self.overtime125, week.overtime125, "overtime125")?,
            overtime150: checked_add(self.overtime150, week.overtime150, "overtime150")?,
            normal_amount: checked_add(self.normal_amount, week.normal_amount, "normal_amount")?,
            overtime125_amount: checked_add(
                self.overtime125_amount,
                week.overtime125_amount,
                "overtime125_amount",
            )?,
            overtime150_amount: checked_add(
                self.overtime150_amount,
                week.overtime150_amount,
                "overtime150_amount",
            )?,
            total_amount: checked_add(self.total_amount, week.total_week_amount, "total_amount")?,
            working_days: self.working_days,
        };
        Ok(())
    }

    /// Adds every field of another set of totals.
    ///
    /// On overflow the totals are left unchanged.
    pub fn add(&mut self, other: &BillingTotals) -> EngineResult<()> {
        *self = BillingTotals {
            total_hours: checked_add(self.total_hours, other.total_hours, "total_hours")?,
            normal_hours: checked_add(self.normal_hours, other.normal_hours, "normal_hours")?,
            overtime125: checked_add(self.overtime125, other.overtime125, "overtime125")?,
            overtime150: checked_add(self.overtime150, other.overtime150, "overtime150")?,
            normal_amount: checked_add(self.normal_amount, other.normal_amount, "normal_amount")?,
            overtime125_amount: checked_add(
                self.overtime125_amount,
                other.overtime125_amount,
                "overtime125_amount",
            )?,
            overtime150_amount: checked_add(
                self.overtime150_amount,
                other.overtime150_amount,
                "overtime150_amount",
            )?,
            total_amount: checked_add(self.total_amount, other.total_amount, "total_amount")?,
            working_days: self.working_days.saturating_add(other.working_days),
        };
        Ok(())
    }

    /// Returns true if nothing was worked.
    pub fn is_zero(&self) -> bool {
        *self == BillingTotals::default()
    }
}

/// One employee's weeks and their rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAggregate {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee reference, passed through for display.
    pub employee: Employee,
    /// Week buckets keyed and ordered by week.
    pub weekly_data: BTreeMap<WeekKey, WeekBucket>,
    /// Sum of every week's calculation plus working days.
    pub totals: BillingTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_week() -> WeekCalculation {
        WeekCalculation {
            total_week_hours: dec("45"),
            normal_hours: dec("35"),
            overtime125: dec("8"),
            overtime150: dec("2"),
            normal_amount: dec("525"),
            overtime125_amount: dec("150"),
            overtime150_amount: dec("45"),
            total_week_amount: dec("720"),
            average_billing_rate: dec("15"),
            ..WeekCalculation::default()
        }
    }

    #[test]
    fn test_add_week_sums_every_field() {
        let mut totals = BillingTotals::default();
        totals.add_week(&sample_week()).unwrap();
        totals.add_week(&sample_week()).unwrap();

        assert_eq!(totals.total_hours, dec("90"));
        assert_eq!(totals.normal_hours, dec("70"));
        assert_eq!(totals.overtime125, dec("16"));
        assert_eq!(totals.overtime150, dec("4"));
        assert_eq!(totals.normal_amount, dec("1050"));
        assert_eq!(totals.overtime125_amount, dec("300"));
        assert_eq!(totals.overtime150_amount, dec("90"));
        assert_eq!(totals.total_amount, dec("1440"));
        assert_eq!(totals.working_days, 0);
    }

    #[test]
    fn test_add_includes_working_days() {
        let mut first = BillingTotals::default();
        first.add_week(&sample_week()).unwrap();
        first.working_days = 5;

        let mut invoice = BillingTotals::default();
        invoice.add(&first).unwrap();
        invoice.add(&first).unwrap();

        assert_eq!(invoice.total_amount, dec("1440"));
        assert_eq!(invoice.working_days, 10);
    }

    #[test]
    fn test_overflowing_add_leaves_totals_unchanged() {
        let mut totals = BillingTotals::default();
        totals.add_week(&sample_week()).unwrap();
        let before = totals.clone();

        let huge = WeekCalculation {
            total_week_amount: Decimal::MAX,
            ..sample_week()
        };
        match totals.add_week(&huge) {
            Err(EngineError::ArithmeticOverflow { level }) => assert_eq!(level, "total_amount"),
            other => panic!("expected ArithmeticOverflow, got {:?}", other),
        }
        assert_eq!(totals, before);
    }

    #[test]
    fn test_default_is_zero() {
        assert!(BillingTotals::default().is_zero());

        let mut totals = BillingTotals::default();
        totals.working_days = 1;
        assert!(!totals.is_zero());
    }

    #[test]
    fn test_totals_serialize_decimals_as_strings() {
        let mut totals = BillingTotals::default();
        totals.add_week(&sample_week()).unwrap();
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["total_amount"], "720");
        assert_eq!(json["overtime150"], "2");
    }
}

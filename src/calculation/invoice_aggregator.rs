//! Invoice rollup and reconciliation.
//!
//! The invoice total must equal the sum of employee totals, which must equal
//! the sum of week totals, which must equal the sum of tier amounts.
//! [`reconcile`] enforces this at currency precision.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeAggregate, InvoiceTotals};

use super::{checked_add, round_currency};

/// Sums every employee's totals field by field.
///
/// # Example
///
/// ```
/// use overtime_billing::calculation::aggregate_invoice;
///
/// let totals = aggregate_invoice(&[]).unwrap();
/// assert!(totals.is_zero());
/// ```
pub fn aggregate_invoice(employees: &[EmployeeAggregate]) -> EngineResult<InvoiceTotals> {
    let mut totals = InvoiceTotals::default();
    for employee in employees {
        totals.add(&employee.totals)?;
    }
    Ok(totals)
}

/// Checks the tier, week, employee and invoice rollups against each other.
///
/// Hours must match exactly; amounts must match after rounding to currency
/// precision. Sums that leave the `Decimal` range are reported as
/// [`EngineError::ArithmeticOverflow`].
pub fn reconcile(employees: &[EmployeeAggregate], totals: &InvoiceTotals) -> EngineResult<()> {
    let mut invoice_amount = Decimal::ZERO;
    let mut invoice_hours = Decimal::ZERO;

    for employee in employees {
        let mut employee_amount = Decimal::ZERO;
        let mut employee_hours = Decimal::ZERO;

        let employee_level = format!("employee {}", employee.employee_id);

        for (key, bucket) in &employee.weekly_data {
            let calc = &bucket.calculation;
            let level = format!("week {} of {}", key, employee.employee_id);

            let tier_amounts = checked_add(
                checked_add(calc.normal_amount, calc.overtime125_amount, &level)?,
                calc.overtime150_amount,
                &level,
            )?;
            let tier_hours = checked_add(
                checked_add(calc.normal_hours, calc.overtime125, &level)?,
                calc.overtime150,
                &level,
            )?;
            check_amount(level.clone(), tier_amounts, calc.total_week_amount)?;
            check_hours(level, tier_hours, calc.total_week_hours)?;

            employee_amount = checked_add(employee_amount, calc.total_week_amount, &employee_level)?;
            employee_hours = checked_add(employee_hours, calc.total_week_hours, &employee_level)?;
        }

        check_amount(employee_level.clone(), employee_amount, employee.totals.total_amount)?;
        check_hours(employee_level, employee_hours, employee.totals.total_hours)?;

        invoice_amount = checked_add(invoice_amount, employee.totals.total_amount, "invoice")?;
        invoice_hours = checked_add(invoice_hours, employee.totals.total_hours, "invoice")?;
    }

    check_amount("invoice".to_string(), invoice_amount, totals.total_amount)?;
    check_hours("invoice".to_string(), invoice_hours, totals.total_hours)
}

fn check_amount(level: String, expected: Decimal, actual: Decimal) -> EngineResult<()> {
    if round_currency(expected) != round_currency(actual) {
        return Err(EngineError::ReconciliationMismatch {
            level,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_hours(level: String, expected: Decimal, actual: Decimal) -> EngineResult<()> {
    if expected != actual {
        return Err(EngineError::ReconciliationMismatch {
            level: format!("{} (hours)", level),
            expected,
            actual,
        });
    }
    Ok(())
}

//! Line item projection.
//!
//! Flattens aggregated weeks into the ordered rows a document renderer lays
//! out. This is a pure projection: hours and amounts are copied from each
//! week's calculation and never recomputed.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{EmployeeAggregate, LineItem, LineItemType, WeekBucket};

use super::{NORMAL_COEFFICIENT, TIER1_COEFFICIENT, TIER2_COEFFICIENT, checked_mul};

impl LineItemType {
    /// The multiplier billed for this tier.
    pub fn coefficient(&self) -> Decimal {
        match self {
            LineItemType::Normal => NORMAL_COEFFICIENT,
            LineItemType::OvertimeTier1 => TIER1_COEFFICIENT,
            LineItemType::OvertimeTier2 => TIER2_COEFFICIENT,
        }
    }
}

/// Projects one employee's weeks into line items.
///
/// Weeks appear in ascending key order; each week contributes up to three
/// items (normal, tier 1, tier 2). Tiers with zero hours are omitted.
pub fn project_employee_line_items(aggregate: &EmployeeAggregate) -> EngineResult<Vec<LineItem>> {
    let mut items = Vec::new();

    for bucket in aggregate.weekly_data.values() {
        let calc = &bucket.calculation;
        let tiers = [
            (LineItemType::Normal, calc.normal_hours, calc.normal_amount),
            (
                LineItemType::OvertimeTier1,
                calc.overtime125,
                calc.overtime125_amount,
            ),
            (
                LineItemType::OvertimeTier2,
                calc.overtime150,
                calc.overtime150_amount,
            ),
        ];

        for (line_type, hours, amount) in tiers {
            if hours.is_zero() {
                continue;
            }
            items.push(line_item(aggregate, bucket, line_type, hours, amount)?);
        }
    }

    Ok(items)
}

/// Projects every employee's weeks, grouped employee by employee in input order.
///
/// # Example
///
/// ```
/// use overtime_billing::calculation::project_line_items;
///
/// assert!(project_line_items(&[]).unwrap().is_empty());
/// ```
pub fn project_line_items(employees: &[EmployeeAggregate]) -> EngineResult<Vec<LineItem>> {
    let mut items = Vec::new();
    for employee in employees {
        items.extend(project_employee_line_items(employee)?);
    }
    Ok(items)
}

fn line_item(
    aggregate: &EmployeeAggregate,
    bucket: &WeekBucket,
    line_type: LineItemType,
    hours: Decimal,
    amount: Decimal,
) -> EngineResult<LineItem> {
    let coefficient = line_type.coefficient();
    let unit_price = checked_mul(
        bucket.calculation.average_billing_rate,
        coefficient,
        &format!("unit price of week {} of {}", bucket.key, aggregate.employee_id),
    )?;
    Ok(LineItem {
        employee_id: aggregate.employee_id.clone(),
        employee_name: aggregate.employee.name.clone(),
        week_key: bucket.key,
        week_period: bucket.key.period_label(),
        line_type,
        hours,
        coefficient,
        unit_price,
        amount,
    })
}

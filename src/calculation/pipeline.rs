//! Invoice calculation pipeline.
//!
//! Wires the engine together for one invoice request: period filtering, week
//! bucketing, weekly pricing, employee and invoice rollups, line item
//! projection, and a final reconciliation check.

use std::time::Instant;

use tracing::{info, warn};

use crate::error::EngineResult;
use crate::models::{
    CalculationWarning, EmployeeAggregate, EmployeeTimesheet, InvoiceCalculation, InvoicePeriod,
    InvoiceRequest, Severity, TimeEntry, WARN_ALL_ENTRIES_EXCLUDED, WARN_ENTRY_EMPLOYEE_MISMATCH,
    WARN_ENTRY_OUTSIDE_PERIOD,
};

use super::{
    RatePolicy, aggregate_employee, aggregate_invoice, bucket_entries, build_week_buckets,
    project_line_items, reconcile,
};

/// One employee's aggregate plus the warnings raised computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeCalculation {
    /// The employee's weeks and totals.
    pub aggregate: EmployeeAggregate,
    /// Warnings in the order they were raised.
    pub warnings: Vec<CalculationWarning>,
}

/// Computes one employee's aggregate for an invoice period.
///
/// Entries belonging to another employee and entries dated outside the
/// period are excluded with a warning. Entries with unparsable dates are
/// passed on so the bucketer reports them. If entries were supplied but none
/// of them survives, a high-severity warning flags the employee for review.
pub fn calculate_employee(
    timesheet: &EmployeeTimesheet,
    period: &InvoicePeriod,
    policy: &RatePolicy,
) -> EngineResult<EmployeeCalculation> {
    let employee = &timesheet.employee;
    let mut warnings = Vec::new();

    let in_period: Vec<TimeEntry> = timesheet
        .entries
        .iter()
        .filter(|entry| {
            if entry.employee_id != employee.id {
                warn!(
                    employee_id = %employee.id,
                    entry_id = %entry.id,
                    entry_employee_id = %entry.employee_id,
                    "Dropping time entry of another employee"
                );
                warnings.push(
                    CalculationWarning::new(
                        WARN_ENTRY_EMPLOYEE_MISMATCH,
                        format!(
                            "Entry belongs to employee '{}', not '{}'",
                            entry.employee_id, employee.id
                        ),
                        Severity::Medium,
                    )
                    .for_employee(&employee.id)
                    .for_entry(&entry.id),
                );
                return false;
            }

            match entry.parse_date() {
                Ok(date) if !period.contains_date(date) => {
                    warn!(
                        employee_id = %employee.id,
                        entry_id = %entry.id,
                        date = %date,
                        "Dropping time entry outside invoice period"
                    );
                    warnings.push(
                        CalculationWarning::new(
                            WARN_ENTRY_OUTSIDE_PERIOD,
                            format!("Entry dated {} is outside {}", date, period.label()),
                            Severity::Low,
                        )
                        .for_employee(&employee.id)
                        .for_entry(&entry.id),
                    );
                    false
                }
                _ => true,
            }
        })
        .cloned()
        .collect();

    let bucketed = bucket_entries(&in_period);
    warnings.extend(bucketed.warnings);

    let priced = build_week_buckets(bucketed.weeks, policy)?;
    warnings.extend(priced.warnings);

    if !timesheet.entries.is_empty() && priced.weekly_data.is_empty() {
        warn!(
            employee_id = %employee.id,
            entries = timesheet.entries.len(),
            "No billable time entries left for employee"
        );
        warnings.push(
            CalculationWarning::new(
                WARN_ALL_ENTRIES_EXCLUDED,
                format!(
                    "All {} entries of employee '{}' were excluded; nothing is billed",
                    timesheet.entries.len(),
                    employee.id
                ),
                Severity::High,
            )
            .for_employee(&employee.id),
        );
    }

    Ok(EmployeeCalculation {
        aggregate: aggregate_employee(employee, priced.weekly_data)?,
        warnings,
    })
}

/// Computes a complete invoice.
///
/// The result is a pure function of `request` and `policy`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// if the period ends before it starts,
/// [`EngineError::ArithmeticOverflow`](crate::error::EngineError::ArithmeticOverflow)
/// if hours or amounts exceed the `Decimal` range, and
/// [`EngineError::ReconciliationMismatch`](crate::error::EngineError::ReconciliationMismatch)
/// if the rollups do not agree.
///
/// # Example
///
/// ```
/// use overtime_billing::calculation::{calculate_invoice, RatePolicy};
/// use overtime_billing::models::{Employee, EmployeeTimesheet, InvoicePeriod, InvoiceRequest};
/// use chrono::NaiveDate;
///
/// let request = InvoiceRequest {
///     invoice_id: "INV-001".to_string(),
///     period: InvoicePeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     },
///     timesheets: vec![EmployeeTimesheet {
///         employee: Employee::new("emp_001", "Alex Martin"),
///         entries: vec![],
///     }],
/// };
///
/// let result = calculate_invoice(&request, &RatePolicy::default()).unwrap();
/// assert!(result.totals.is_zero());
/// assert!(result.line_items.is_empty());
/// ```
pub fn calculate_invoice(
    request: &InvoiceRequest,
    policy: &RatePolicy,
) -> EngineResult<InvoiceCalculation> {
    let start_time = Instant::now();
    request.period.validate()?;

    info!(
        invoice_id = %request.invoice_id,
        period = %request.period.label(),
        employees = request.timesheets.len(),
        "Calculating invoice"
    );

    let mut employees = Vec::with_capacity(request.timesheets.len());
    let mut warnings = Vec::new();

    for timesheet in &request.timesheets {
        let calculation = calculate_employee(timesheet, &request.period, policy)?;
        employees.push(calculation.aggregate);
        warnings.extend(calculation.warnings);
    }

    let totals = aggregate_invoice(&employees)?;
    reconcile(&employees, &totals)?;
    let line_items = project_line_items(&employees)?;

    info!(
        invoice_id = %request.invoice_id,
        total_hours = %totals.total_hours,
        total_amount = %totals.total_amount,
        line_items = line_items.len(),
        warnings = warnings.len(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Invoice calculated"
    );

    Ok(InvoiceCalculation {
        period: request.period.clone(),
        employees,
        totals,
        line_items,
        warnings,
    })
}

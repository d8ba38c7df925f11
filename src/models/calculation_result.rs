//! Calculation result models for the Overtime Billing Engine.
//!
//! This module contains the [`InvoiceCalculation`] type capturing every output
//! of one invoice computation, and the [`CalculationWarning`] records emitted
//! for recoverable data problems along the way.

use serde::{Deserialize, Serialize};

use super::{EmployeeAggregate, InvoicePeriod, InvoiceTotals, LineItem};

/// Warning code: an entry date could not be parsed; the entry was excluded.
pub const WARN_INVALID_ENTRY_DATE: &str = "INVALID_ENTRY_DATE";
/// Warning code: an entry fell outside the invoice period; the entry was excluded.
pub const WARN_ENTRY_OUTSIDE_PERIOD: &str = "ENTRY_OUTSIDE_PERIOD";
/// Warning code: an entry belonged to another employee; the entry was excluded.
pub const WARN_ENTRY_EMPLOYEE_MISMATCH: &str = "ENTRY_EMPLOYEE_MISMATCH";
/// Warning code: an employee had entries but none of them could be billed.
pub const WARN_ALL_ENTRIES_EXCLUDED: &str = "ALL_ENTRIES_EXCLUDED";
/// Warning code: a week was priced at the contract default rate.
pub const WARN_CONTRACT_DEFAULT_RATE_USED: &str = "CONTRACT_DEFAULT_RATE_USED";
/// Warning code: a week was priced at the policy fallback rate.
pub const WARN_FALLBACK_RATE_USED: &str = "FALLBACK_RATE_USED";
/// Warning code: entries of one week carried different rates.
pub const WARN_MIXED_RATES_IN_WEEK: &str = "MIXED_RATES_IN_WEEK";
/// Warning code: an entry had negative hours, counted as zero.
pub const WARN_NEGATIVE_HOURS_IGNORED: &str = "NEGATIVE_HOURS_IGNORED";

/// How much attention a warning needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; the result is still what the caller expects.
    Low,
    /// Some input was excluded from the result.
    Medium,
    /// The result is likely wrong without human review.
    High,
}

/// A recoverable problem noticed during calculation.
///
/// # Example
///
/// ```
/// use overtime_billing::models::{CalculationWarning, Severity};
///
/// let warning = CalculationWarning::new("FALLBACK_RATE_USED", "No rate found", Severity::Low)
///     .for_employee("emp_001");
/// assert_eq!(warning.employee_id.as_deref(), Some("emp_001"));
/// assert_eq!(warning.entry_id, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: Severity,
    /// The employee concerned, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The time entry concerned, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
}

impl CalculationWarning {
    /// Creates a warning not yet tied to an employee or entry.
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
            employee_id: None,
            entry_id: None,
        }
    }

    /// Ties the warning to an employee.
    pub fn for_employee(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }

    /// Ties the warning to a time entry.
    pub fn for_entry(mut self, entry_id: impl Into<String>) -> Self {
        self.entry_id = Some(entry_id.into());
        self
    }
}

/// The complete result of computing one invoice.
///
/// This is a pure function of the request and rate policy: computing the
/// same input twice serializes to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCalculation {
    /// The period the invoice covers.
    pub period: InvoicePeriod,
    /// Per-employee weeks and totals, in request order.
    pub employees: Vec<EmployeeAggregate>,
    /// Invoice-level totals.
    pub totals: InvoiceTotals,
    /// Billable rows, grouped employee by employee, weeks ascending.
    pub line_items: Vec<LineItem>,
    /// Recoverable problems noticed during calculation.
    pub warnings: Vec<CalculationWarning>,
}

impl InvoiceCalculation {
    /// Returns the warnings carrying the given code.
    pub fn warnings_with_code<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a CalculationWarning> + 'a {
        self.warnings.iter().filter(move |w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillingTotals;
    use chrono::NaiveDate;

    #[test]
    fn test_warning_builders() {
        let warning = CalculationWarning::new(
            WARN_INVALID_ENTRY_DATE,
            "Date 'soon' could not be parsed",
            Severity::Medium,
        )
        .for_employee("emp_001")
        .for_entry("te_009");

        assert_eq!(warning.code, "INVALID_ENTRY_DATE");
        assert_eq!(warning.severity, Severity::Medium);
        assert_eq!(warning.employee_id.as_deref(), Some("emp_001"));
        assert_eq!(warning.entry_id.as_deref(), Some("te_009"));
    }

    #[test]
    fn test_warning_serialization_skips_missing_ids() {
        let warning = CalculationWarning::new(WARN_FALLBACK_RATE_USED, "fallback", Severity::Low);
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"severity\":\"low\""));
        assert!(!json.contains("employee_id"));
        assert!(!json.contains("entry_id"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_warnings_with_code() {
        let calculation = InvoiceCalculation {
            period: InvoicePeriod {
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            },
            employees: vec![],
            totals: BillingTotals::default(),
            line_items: vec![],
            warnings: vec![
                CalculationWarning::new(WARN_FALLBACK_RATE_USED, "a", Severity::Low),
                CalculationWarning::new(WARN_INVALID_ENTRY_DATE, "b", Severity::Medium),
                CalculationWarning::new(WARN_FALLBACK_RATE_USED, "c", Severity::Low),
            ],
        };

        assert_eq!(calculation.warnings_with_code(WARN_FALLBACK_RATE_USED).count(), 2);
        assert_eq!(calculation.warnings_with_code(WARN_MIXED_RATES_IN_WEEK).count(), 0);
    }
}

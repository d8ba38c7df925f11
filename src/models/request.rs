//! Invoice request models.
//!
//! An [`InvoiceRequest`] is the immutable input snapshot for one invoice:
//! the period and, per employee, the entries fetched from the time-tracking
//! store.

use serde::{Deserialize, Serialize};

use super::{Employee, InvoicePeriod, TimeEntry};

/// One employee's entries as fetched for an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTimesheet {
    /// The employee the entries belong to.
    pub employee: Employee,
    /// The raw entries, in any order.
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

/// Everything needed to compute one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// The caller's invoice identifier.
    pub invoice_id: String,
    /// The period the invoice covers.
    pub period: InvoicePeriod,
    /// Employees to include, in rendering order.
    pub timesheets: Vec<EmployeeTimesheet>,
}

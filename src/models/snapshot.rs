//! Frozen invoice snapshots.
//!
//! Once an invoice is issued, its inputs and computed result are frozen in an
//! [`InvoiceSnapshot`] and stored alongside the invoice record. Later edits to
//! the live time entries never alter the snapshot; they can only be detected
//! with [`InvoiceSnapshot::differs_from_live`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::reconcile;
use crate::error::{EngineError, EngineResult};

use super::{EmployeeTimesheet, InvoiceCalculation, InvoiceRequest};

/// An immutable record of an issued invoice's inputs and result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    /// Unique identifier for this snapshot.
    pub snapshot_id: Uuid,
    /// The invoice the snapshot belongs to.
    pub invoice_id: String,
    /// When the snapshot was taken.
    pub captured_at: DateTime<Utc>,
    /// The version of the engine that computed the result.
    pub engine_version: String,
    /// The entries exactly as they were when the invoice was computed.
    pub timesheets: Vec<EmployeeTimesheet>,
    /// The computed result.
    pub result: InvoiceCalculation,
}

impl InvoiceSnapshot {
    /// Freezes a request and the result computed from it.
    pub fn capture(request: &InvoiceRequest, result: InvoiceCalculation) -> Self {
        Self {
            snapshot_id: Uuid::new_v4(),
            invoice_id: request.invoice_id.clone(),
            captured_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            timesheets: request.timesheets.clone(),
            result,
        }
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::SnapshotError {
            message: e.to_string(),
        })
    }

    /// Restores a snapshot from JSON.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::SnapshotError {
            message: e.to_string(),
        })
    }

    /// Checks that the stored result still reconciles at every level.
    ///
    /// Useful after restoring a snapshot from storage.
    pub fn verify_reconciliation(&self) -> EngineResult<()> {
        reconcile(&self.result.employees, &self.result.totals)
    }

    /// Returns true if the live entries no longer match the frozen ones.
    ///
    /// The snapshot itself is left untouched; reissuing is the caller's call.
    pub fn differs_from_live(&self, live: &[EmployeeTimesheet]) -> bool {
        self.timesheets.as_slice() != live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingTotals, Employee, InvoicePeriod, TimeEntry};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn create_request() -> InvoiceRequest {
        InvoiceRequest {
            invoice_id: "INV-001".to_string(),
            period: InvoicePeriod {
                start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            },
            timesheets: vec![EmployeeTimesheet {
                employee: Employee::new("emp_001", "Alex Martin"),
                entries: vec![TimeEntry {
                    id: "te_001".to_string(),
                    employee_id: "emp_001".to_string(),
                    contract_id: "ctr_001".to_string(),
                    contract_title: "Site maintenance".to_string(),
                    date: "2026-01-12".to_string(),
                    start_time: None,
                    end_time: None,
                    total_hours: Some(Decimal::from(8)),
                    billing_rate: Some(Decimal::from(20)),
                    notes: None,
                }],
            }],
        }
    }

    fn empty_result(request: &InvoiceRequest) -> InvoiceCalculation {
        InvoiceCalculation {
            period: request.period.clone(),
            employees: vec![],
            totals: BillingTotals::default(),
            line_items: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_capture_copies_request() {
        let request = create_request();
        let snapshot = InvoiceSnapshot::capture(&request, empty_result(&request));

        assert_eq!(snapshot.invoice_id, "INV-001");
        assert_eq!(snapshot.timesheets, request.timesheets);
        assert_eq!(snapshot.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_json_round_trip() {
        let request = create_request();
        let snapshot = InvoiceSnapshot::capture(&request, empty_result(&request));

        let json = snapshot.to_json().unwrap();
        let restored = InvoiceSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            InvoiceSnapshot::from_json("{\"snapshot_id\": 42}"),
            Err(EngineError::SnapshotError { .. })
        ));
    }

    #[test]
    fn test_live_edit_is_detected_without_touching_snapshot() {
        let request = create_request();
        let snapshot = InvoiceSnapshot::capture(&request, empty_result(&request));
        assert!(!snapshot.differs_from_live(&request.timesheets));

        let mut live = request.timesheets.clone();
        live[0].entries[0].total_hours = Some(Decimal::from(10));

        assert!(snapshot.differs_from_live(&live));
        assert_eq!(
            snapshot.timesheets[0].entries[0].total_hours,
            Some(Decimal::from(8))
        );
    }
}

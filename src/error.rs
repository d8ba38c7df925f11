//! Error types for the Overtime Billing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only conditions the engine cannot recover from locally are errors; data
//! problems in individual time entries are reported as
//! [`CalculationWarning`](crate::models::CalculationWarning)s instead.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Overtime Billing Engine.
///
/// # Example
///
/// ```
/// use overtime_billing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/billing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/billing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contains an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time entry carried a date that could not be parsed.
    #[error("Invalid date '{value}' on time entry '{entry_id}'")]
    InvalidEntryDate {
        /// The ID of the time entry.
        entry_id: String,
        /// The raw date text.
        value: String,
    },

    /// An invoice period whose end precedes its start.
    #[error("Invalid invoice period: {start} is after {end}")]
    InvalidPeriod {
        /// The period start date.
        start: NaiveDate,
        /// The period end date.
        end: NaiveDate,
    },

    /// Finer-grained totals did not add up to a coarser total.
    #[error("Reconciliation failed at {level}: expected {expected}, got {actual}")]
    ReconciliationMismatch {
        /// Which rollup failed (e.g. "week 2026-W03 of emp_001").
        level: String,
        /// The sum of the finer-grained amounts.
        expected: Decimal,
        /// The stored coarser amount.
        actual: Decimal,
    },

    /// A sum or product left the representable `Decimal` range.
    #[error("Arithmetic overflow while computing {level}")]
    ArithmeticOverflow {
        /// What was being computed (e.g. "week of emp_001", "total_amount").
        level: String,
    },

    /// An invoice snapshot could not be serialized or deserialized.
    #[error("Snapshot error: {message}")]
    SnapshotError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/billing.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/billing.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "fallback_rate".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'fallback_rate': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_entry_date_displays_entry_and_value() {
        let error = EngineError::InvalidEntryDate {
            entry_id: "te_001".to_string(),
            value: "31/02/2026".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '31/02/2026' on time entry 'te_001'"
        );
    }

    #[test]
    fn test_invalid_period_displays_dates() {
        let error = EngineError::InvalidPeriod {
            start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid invoice period: 2026-02-01 is after 2026-01-01"
        );
    }

    #[test]
    fn test_reconciliation_mismatch_displays_amounts() {
        let error = EngineError::ReconciliationMismatch {
            level: "invoice".to_string(),
            expected: Decimal::from_str("1125.00").unwrap(),
            actual: Decimal::from_str("1124.99").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Reconciliation failed at invoice: expected 1125.00, got 1124.99"
        );
    }

    #[test]
    fn test_arithmetic_overflow_displays_level() {
        let error = EngineError::ArithmeticOverflow {
            level: "week of emp_001".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow while computing week of emp_001"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_snapshot_error() -> EngineResult<()> {
            Err(EngineError::SnapshotError {
                message: "truncated".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_snapshot_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

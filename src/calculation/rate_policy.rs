//! Billing rate resolution.
//!
//! Each week is priced at a single client-facing rate. This module provides
//! the [`RatePolicy`] that resolves it through a fixed fallback chain:
//!
//! 1. the billing rate carried on the first entry of the week;
//! 2. the default rate configured for that entry's contract;
//! 3. the policy's fallback rate.
//!
//! Steps 2 and 3 still complete the calculation but record a warning.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{
    CalculationWarning, RateSource, Severity, TimeEntry, WARN_CONTRACT_DEFAULT_RATE_USED,
    WARN_FALLBACK_RATE_USED, WARN_MIXED_RATES_IN_WEEK,
};

/// The fallback billing rate used when neither the entry nor the contract
/// provides one.
pub const DEFAULT_FALLBACK_RATE: Decimal = Decimal::from_parts(2500, 0, 0, false, 2);

/// The rate chosen for one week and how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResolution {
    /// The rate to apply to every tier of the week.
    pub rate: Decimal,
    /// Which step of the chain supplied the rate.
    pub source: RateSource,
    /// Warnings raised while resolving.
    pub warnings: Vec<CalculationWarning>,
}

/// Explicit, injectable billing-rate policy.
///
/// # Example
///
/// ```
/// use overtime_billing::calculation::RatePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = RatePolicy::new(Decimal::from(30))
///     .with_contract_rate("ctr_001", Decimal::from(45));
///
/// assert_eq!(policy.contract_rate("ctr_001"), Some(Decimal::from(45)));
/// assert_eq!(policy.contract_rate("ctr_999"), None);
/// assert_eq!(policy.fallback_rate(), Decimal::from(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatePolicy {
    fallback_rate: Decimal,
    contract_rates: HashMap<String, Decimal>,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_RATE)
    }
}

impl RatePolicy {
    /// Creates a policy with the given fallback rate and no contract defaults.
    pub fn new(fallback_rate: Decimal) -> Self {
        Self {
            fallback_rate,
            contract_rates: HashMap::new(),
        }
    }

    /// Adds a default rate for a contract.
    pub fn with_contract_rate(mut self, contract_id: impl Into<String>, rate: Decimal) -> Self {
        self.contract_rates.insert(contract_id.into(), rate);
        self
    }

    /// Returns the fallback rate.
    pub fn fallback_rate(&self) -> Decimal {
        self.fallback_rate
    }

    /// Returns the contract's default rate if one is configured and positive.
    pub fn contract_rate(&self, contract_id: &str) -> Option<Decimal> {
        self.contract_rates
            .get(contract_id)
            .copied()
            .filter(|rate| *rate > Decimal::ZERO)
    }

    /// Resolves the billing rate for one week's entries.
    ///
    /// `entries` must already be in week order; the first entry decides.
    /// An empty week resolves to a zero rate with [`RateSource::None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use overtime_billing::calculation::RatePolicy;
    /// use overtime_billing::models::{RateSource, TimeEntry};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     id: "te_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     contract_id: "ctr_001".to_string(),
    ///     contract_title: "Site maintenance".to_string(),
    ///     date: "2026-01-12".to_string(),
    ///     start_time: None,
    ///     end_time: None,
    ///     total_hours: Some(Decimal::from(8)),
    ///     billing_rate: None,
    ///     notes: None,
    /// };
    ///
    /// let policy = RatePolicy::new(Decimal::from(25)).with_contract_rate("ctr_001", Decimal::from(40));
    /// let resolution = policy.resolve(&[entry]);
    ///
    /// assert_eq!(resolution.rate, Decimal::from(40));
    /// assert_eq!(resolution.source, RateSource::ContractDefault);
    /// assert_eq!(resolution.warnings.len(), 1);
    /// ```
    pub fn resolve(&self, entries: &[TimeEntry]) -> RateResolution {
        let Some(first) = entries.first() else {
            return RateResolution {
                rate: Decimal::ZERO,
                source: RateSource::None,
                warnings: Vec::new(),
            };
        };

        let mut warnings = Vec::new();

        let (rate, source) = if let Some(rate) = first.usable_billing_rate() {
            (rate, RateSource::Entry)
        } else if let Some(rate) = self.contract_rate(&first.contract_id) {
            warn!(
                employee_id = %first.employee_id,
                entry_id = %first.id,
                contract_id = %first.contract_id,
                rate = %rate,
                "Entry has no billing rate, using contract default"
            );
            warnings.push(
                CalculationWarning::new(
                    WARN_CONTRACT_DEFAULT_RATE_USED,
                    format!(
                        "Entry has no billing rate; using default rate {} of contract '{}'",
                        rate, first.contract_id
                    ),
                    Severity::Low,
                )
                .for_employee(&first.employee_id)
                .for_entry(&first.id),
            );
            (rate, RateSource::ContractDefault)
        } else {
            warn!(
                employee_id = %first.employee_id,
                entry_id = %first.id,
                contract_id = %first.contract_id,
                rate = %self.fallback_rate,
                "No entry or contract rate, using fallback rate"
            );
            warnings.push(
                CalculationWarning::new(
                    WARN_FALLBACK_RATE_USED,
                    format!(
                        "No billing rate on entry or contract '{}'; using fallback rate {}",
                        first.contract_id, self.fallback_rate
                    ),
                    Severity::Low,
                )
                .for_employee(&first.employee_id)
                .for_entry(&first.id),
            );
            (self.fallback_rate, RateSource::Fallback)
        };

        if let Some(other) = entries
            .iter()
            .filter_map(|e| e.usable_billing_rate().map(|r| (e, r)))
            .find(|(_, r)| *r != rate)
        {
            let (entry, other_rate) = other;
            warn!(
                employee_id = %entry.employee_id,
                entry_id = %entry.id,
                applied_rate = %rate,
                entry_rate = %other_rate,
                "Week contains entries with differing billing rates"
            );
            warnings.push(
                CalculationWarning::new(
                    WARN_MIXED_RATES_IN_WEEK,
                    format!(
                        "Entry rate {} differs from the week's applied rate {}",
                        other_rate, rate
                    ),
                    Severity::Low,
                )
                .for_employee(&entry.employee_id)
                .for_entry(&entry.id),
            );
        }

        RateResolution {
            rate,
            source,
            warnings,
        }
    }
}

//! Configuration types for billing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML billing configuration file.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DEFAULT_FALLBACK_RATE;

/// The default billing rate of one contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractRate {
    /// Optional contract title, for readability of the file only.
    #[serde(default)]
    pub title: Option<String>,
    /// The hourly billing rate used when an entry carries none.
    pub hourly: Decimal,
}

/// The complete billing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BillingConfig {
    /// Currency code shown on documents; not used in calculation.
    #[serde(default)]
    pub currency: Option<String>,
    /// Rate used when neither entry nor contract provides one.
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate: Decimal,
    /// Default rates keyed by contract ID.
    #[serde(default)]
    pub contract_rates: BTreeMap<String, ContractRate>,
}

fn default_fallback_rate() -> Decimal {
    DEFAULT_FALLBACK_RATE
}

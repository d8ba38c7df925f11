//! Configuration loading for the Overtime Billing Engine.
//!
//! This module loads the billing rate configuration (fallback rate and
//! per-contract default rates) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use overtime_billing::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/billing.yaml").unwrap();
//! println!("Contracts with default rates: {}", loader.config().contract_rates.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BillingConfig, ContractRate};

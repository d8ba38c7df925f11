//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the billing
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::RatePolicy;
use crate::error::{EngineError, EngineResult};

use super::types::BillingConfig;

/// Loads and provides access to the billing configuration.
///
/// # File Format
///
/// ```yaml
/// currency: EUR
/// fallback_rate: "25.00"
/// contract_rates:
///   ctr_001:
///     title: Site maintenance
///     hourly: "32.50"
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_billing::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/billing.yaml").unwrap();
/// let policy = loader.rate_policy();
/// println!("Fallback rate: {}", policy.fallback_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BillingConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A rate is zero or negative (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(
            path = %path_str,
            contracts = loader.config.contract_rates.len(),
            "Loaded billing configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_billing::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("fallback_rate: \"30\"\n", "inline").unwrap();
    /// assert_eq!(loader.rate_policy().fallback_rate(), Decimal::from(30));
    /// ```
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let config: BillingConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &BillingConfig) -> EngineResult<()> {
        if config.fallback_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "fallback_rate".to_string(),
                message: format!("must be greater than zero, got {}", config.fallback_rate),
            });
        }

        for (contract_id, rate) in &config.contract_rates {
            if rate.hourly <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: format!("contract_rates.{}.hourly", contract_id),
                    message: format!("must be greater than zero, got {}", rate.hourly),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Builds the rate policy described by the configuration.
    pub fn rate_policy(&self) -> RatePolicy {
        self.config
            .contract_rates
            .iter()
            .fold(
                RatePolicy::new(self.config.fallback_rate),
                |policy, (contract_id, rate)| policy.with_contract_rate(contract_id, rate.hourly),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("config/billing.yaml").unwrap();
        let config = loader.config();

        assert_eq!(config.currency.as_deref(), Some("EUR"));
        assert_eq!(config.fallback_rate, dec("25.00"));
        assert_eq!(config.contract_rates["ctr_001"].hourly, dec("32.50"));
    }

    #[test]
    fn test_load_missing_file() {
        match ConfigLoader::load("config/does_not_exist.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("does_not_exist.yaml"))
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ConfigLoader::from_yaml_str("fallback_rate: [not, a, rate", "inline");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let loader = ConfigLoader::from_yaml_str("{}", "inline").unwrap();
        assert_eq!(loader.config().fallback_rate, dec("25.00"));
        assert!(loader.config().contract_rates.is_empty());
        assert!(loader.config().currency.is_none());
    }

    #[test]
    fn test_rejects_non_positive_fallback_rate() {
        match ConfigLoader::from_yaml_str("fallback_rate: \"0\"\n", "inline") {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "fallback_rate"),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_negative_contract_rate() {
        let yaml = r#"
contract_rates:
  ctr_009:
    hourly: "-5"
"#;
        match ConfigLoader::from_yaml_str(yaml, "inline") {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "contract_rates.ctr_009.hourly")
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_policy_from_config() {
        let yaml = r#"
fallback_rate: "19.99"
contract_rates:
  ctr_001:
    title: Site maintenance
    hourly: "32.50"
  ctr_002:
    hourly: "40"
"#;
        let policy = ConfigLoader::from_yaml_str(yaml, "inline")
            .unwrap()
            .rate_policy();

        assert_eq!(policy.fallback_rate(), dec("19.99"));
        assert_eq!(policy.contract_rate("ctr_001"), Some(dec("32.50")));
        assert_eq!(policy.contract_rate("ctr_002"), Some(dec("40")));
        assert_eq!(policy.contract_rate("ctr_003"), None);
    }
}

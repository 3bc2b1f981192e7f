//! Rule file loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fee rules
//! from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{FeeError, FeeResult};

use super::types::FeeRules;

/// Loads and provides access to the fee rules.
///
/// A rule file is a single YAML document mirroring [`FeeRules`]:
///
/// ```text
/// cart_value:
///   minimum: 1000
///   free_delivery: 20000
/// distance:
///   minimum: 1000
///   step: 500
///   base_fee: 200
///   surcharge_rate: 100
/// items:
///   large_order_minimum: 4
///   large_order_maximum: 13
///   bulk_fee: 50
///   large_order_surcharge: 120
/// peak:
///   day: Fri
///   hour_start: 15
///   hour_end: 19
///   multiplier: "1.2"
/// grand_total_limit: 1500
/// ```
///
/// # Example
///
/// ```no_run
/// use delivery_fee_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fee_rules.yaml").unwrap();
/// println!("Fee cap: {}", loader.rules().grand_total_limit);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: FeeRules,
}

impl ConfigLoader {
    /// Loads rules from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML for
    /// [`FeeRules`], or describes an inconsistent rule set.
    pub fn load<P: AsRef<Path>>(path: P) -> FeeResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| FeeError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            FeeError::ConfigParseError { message, .. } => FeeError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses and validates rules from YAML text.
    pub fn from_yaml_str(content: &str) -> FeeResult<Self> {
        let rules: FeeRules =
            serde_yaml::from_str(content).map_err(|e| FeeError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_rules(rules)
    }

    /// Wraps an already-built rule set after validating it.
    pub fn from_rules(rules: FeeRules) -> FeeResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &FeeRules {
        &self.rules
    }

    /// Consumes the loader, returning the rules.
    pub fn into_rules(self) -> FeeRules {
        self.rules
    }
}

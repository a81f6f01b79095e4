//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayRates, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// The file is a single YAML document:
/// ```text
/// rates:
///   daily_rate: 1000
///   unit_rate: 5000
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Daily rate: ${}", loader.rates().daily_rate);
/// # Ok::<(), employee_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for [`PayrollConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            daily_rate = config.rates.daily_rate,
            unit_rate = config.rates.unit_rate,
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    fn parse(content: &str, path: &str) -> PayrollResult<PayrollConfig> {
        // An empty document deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(PayrollConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured pay rates.
    pub fn rates(&self) -> PayRates {
        self.config.rates
    }
}

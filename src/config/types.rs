//! Configuration types for payroll calculation.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! field has a default so that a partial file only overrides what it names.

use serde::Deserialize;

/// Amount paid per working day to an office employee.
pub const DEFAULT_DAILY_RATE: i32 = 1000;

/// Amount paid per unit produced by a worker.
pub const DEFAULT_UNIT_RATE: i32 = 5000;

/// Pay rates applied by the salary rules.
///
/// # Example
///
/// ```
/// use employee_payroll::config::PayRates;
///
/// let rates = PayRates::default();
/// assert_eq!(rates.daily_rate, 1000);
/// assert_eq!(rates.unit_rate, 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayRates {
    /// Pay per working day for office employees.
    pub daily_rate: i32,
    /// Pay per product for workers.
    pub unit_rate: i32,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            daily_rate: DEFAULT_DAILY_RATE,
            unit_rate: DEFAULT_UNIT_RATE,
        }
    }
}

/// The complete payroll configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Pay rates used for every salary calculation.
    pub rates: PayRates,
}

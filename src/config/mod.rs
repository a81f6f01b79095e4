//! Configuration loading and management for the employee payroll crate.
//!
//! # Example
//!
//! ```no_run
//! use employee_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Unit rate: ${}", config.rates().unit_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DAILY_RATE, DEFAULT_UNIT_RATE, PayRates, PayrollConfig};

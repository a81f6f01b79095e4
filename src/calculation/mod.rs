//! Calculation logic for the employee payroll crate.
//!
//! This module contains the per-employee salary rule and the aggregation of
//! salaries into a payroll total and summary.

mod payroll_total;
mod salary;

pub use payroll_total::{summarize, total_payroll};
pub use salary::{SalaryCalculation, calculate_salary};

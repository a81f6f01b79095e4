//! Core data models for the employee payroll crate.

mod employee;
mod payroll_summary;

pub use employee::{DEFAULT_BIRTH_DATE, DEFAULT_NAME, Employee, EmployeeKind, VariantKind};
pub use payroll_summary::PayrollSummary;

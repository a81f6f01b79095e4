//! Aggregate payroll figures for a registry.

use serde::{Deserialize, Serialize};

/// Headcount and total payroll across every enrolled employee.
///
/// # Example
///
/// ```
/// use employee_payroll::models::PayrollSummary;
///
/// let summary = PayrollSummary::default();
/// assert_eq!(summary.headcount, 0);
/// assert_eq!(summary.total_payroll, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of enrolled employees.
    pub headcount: usize,
    /// Number of office employees.
    pub office_employees: usize,
    /// Number of workers.
    pub workers: usize,
    /// Sum of every employee's salary.
    pub total_payroll: i128,
}

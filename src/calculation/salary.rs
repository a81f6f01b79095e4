//! Per-employee salary calculation.
//!
//! Office employees are paid per working day and workers per product. The
//! result records the inputs alongside the amount so a caller can show how
//! the figure was reached.

use tracing::debug;

use crate::config::PayRates;
use crate::models::{Employee, VariantKind};

/// The result of calculating one employee's salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryCalculation {
    /// The kind of employee the rule was chosen for.
    pub variant: VariantKind,
    /// Working days or products.
    pub units: i32,
    /// Rate applied per unit.
    pub rate: i32,
    /// `units * rate`.
    pub amount: i64,
    /// Human-readable working, e.g. `20 Working Days x $1000 = $20000`.
    pub reasoning: String,
}

/// Calculates an employee's salary at the given rates.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::calculate_salary;
/// use employee_payroll::config::PayRates;
/// use employee_payroll::models::Employee;
///
/// let ana = Employee::office("Ana", "01/01/1990", 20);
/// let result = calculate_salary(&ana, &PayRates::default());
/// assert_eq!(result.amount, 20_000);
/// assert_eq!(result.reasoning, "20 Working Days x $1000 = $20000");
/// ```
pub fn calculate_salary(employee: &Employee, rates: &PayRates) -> SalaryCalculation {
    let kind = employee.kind();
    let variant = kind.variant();
    let units = kind.extra_field();
    let rate = kind.rate(rates);
    let amount = kind.salary(rates);

    debug!(
        name = employee.name(),
        variant = %variant,
        units,
        rate,
        amount,
        "Calculated salary"
    );

    SalaryCalculation {
        variant,
        units,
        rate,
        amount,
        reasoning: format!(
            "{} {} x ${} = ${}",
            units,
            variant.extra_field_label(),
            rate,
            amount
        ),
    }
}

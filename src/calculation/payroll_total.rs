//! Payroll aggregation across many employees.

use crate::config::PayRates;
use crate::models::{Employee, PayrollSummary, VariantKind};

/// Sums the salaries of the given employees.
///
/// Each salary fits in an `i64`; the sum is taken in `i128` so it cannot
/// overflow for any realistic headcount. Addition is commutative, so the
/// result does not depend on iteration order. An empty input totals 0.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::total_payroll;
/// use employee_payroll::config::PayRates;
/// use employee_payroll::models::Employee;
///
/// let staff = [
///     Employee::office("Ana", "01/01/1990", 20),
///     Employee::worker("Leo", "02/02/1992", 3),
/// ];
/// assert_eq!(total_payroll(&staff, &PayRates::default()), 35_000);
/// ```
pub fn total_payroll<'a, I>(employees: I, rates: &PayRates) -> i128
where
    I: IntoIterator<Item = &'a Employee>,
{
    employees
        .into_iter()
        .map(|e| i128::from(e.salary(rates)))
        .sum()
}

/// Builds headcounts and the total payroll in one pass.
pub fn summarize<'a, I>(employees: I, rates: &PayRates) -> PayrollSummary
where
    I: IntoIterator<Item = &'a Employee>,
{
    employees
        .into_iter()
        .fold(PayrollSummary::default(), |mut summary, employee| {
            summary.headcount += 1;
            match employee.variant() {
                VariantKind::OfficeEmployee => summary.office_employees += 1,
                VariantKind::Worker => summary.workers += 1,
            }
            summary.total_payroll += i128::from(employee.salary(rates));
            summary
        })
}

//! The employee registry.
//!
//! [`EmployeeRegistry`] is the sole owner of enrolled records. Records are
//! kept in enrollment order, which is also their display order. There is no
//! removal; records are dropped together with the registry.

use tracing::debug;

use crate::calculation::{summarize, total_payroll};
use crate::config::PayRates;
use crate::models::{Employee, PayrollSummary};

/// An ordered, append-only collection of employees.
///
/// # Example
///
/// ```
/// use employee_payroll::models::Employee;
/// use employee_payroll::registry::EmployeeRegistry;
///
/// let mut registry = EmployeeRegistry::new();
/// registry.enroll(Employee::office("Ana", "01/01/1990", 20));
/// registry.enroll(Employee::worker("Leo", "02/02/1992", 3));
///
/// let names: Vec<_> = registry.enumerate().map(|(i, e)| (i, e.name())).collect();
/// assert_eq!(names, vec![(1, "Ana"), (2, "Leo")]);
/// assert_eq!(registry.total_payroll(), 35_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    rates: PayRates,
}

impl EmployeeRegistry {
    /// Creates an empty registry using the default pay rates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry using the given pay rates.
    pub fn with_rates(rates: PayRates) -> Self {
        Self {
            employees: Vec::new(),
            rates,
        }
    }

    /// Returns the pay rates salaries are computed with.
    pub fn rates(&self) -> &PayRates {
        &self.rates
    }

    /// Appends an employee. Duplicate names are allowed.
    pub fn enroll(&mut self, employee: Employee) {
        debug!(
            name = employee.name(),
            variant = %employee.variant(),
            position = self.employees.len() + 1,
            "Enrolled employee"
        );
        self.employees.push(employee);
    }

    /// Iterates over `(index, employee)` in enrollment order, 1-based.
    ///
    /// The iterator borrows the registry, so it can be created again for an
    /// identical second pass.
    pub fn enumerate(&self) -> impl ExactSizeIterator<Item = (usize, &Employee)> + '_ {
        self.employees.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    /// Returns the employee at a 1-based position.
    pub fn get(&self, index: usize) -> Option<&Employee> {
        index.checked_sub(1).and_then(|i| self.employees.get(i))
    }

    /// Returns the number of enrolled employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nobody has been enrolled.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Computes an employee's salary at this registry's rates.
    ///
    /// This is the figure shown on the employee's card and counted in
    /// [`total_payroll`](Self::total_payroll).
    pub fn salary_of(&self, employee: &Employee) -> i64 {
        employee.salary(&self.rates)
    }

    /// Sums every enrolled employee's salary. Returns 0 when empty.
    pub fn total_payroll(&self) -> i128 {
        total_payroll(&self.employees, &self.rates)
    }

    /// Returns headcounts and the total payroll.
    pub fn summary(&self) -> PayrollSummary {
        summarize(&self.employees, &self.rates)
    }
}

impl Extend<Employee> for EmployeeRegistry {
    fn extend<T: IntoIterator<Item = Employee>>(&mut self, iter: T) {
        for employee in iter {
            self.enroll(employee);
        }
    }
}

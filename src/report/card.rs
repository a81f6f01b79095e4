//! Fixed-format card for a single employee.

use std::fmt;

use crate::config::PayRates;
use crate::models::{Employee, VariantKind};

pub(crate) const BOX_RULE: &str = "  +-----------------------------+";

/// Displays one employee as a boxed card.
///
/// The layout is: banner, name, birth date, salary, then the
/// variant-specific field.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeCard<'a> {
    employee: &'a Employee,
    rates: &'a PayRates,
}

impl<'a> EmployeeCard<'a> {
    /// Creates a card for `employee` with salary computed at `rates`.
    pub fn new(employee: &'a Employee, rates: &'a PayRates) -> Self {
        Self { employee, rates }
    }
}

fn banner(variant: VariantKind) -> &'static str {
    match variant {
        VariantKind::OfficeEmployee => "  |      OFFICE EMPLOYEE        |",
        VariantKind::Worker => "  |          WORKER             |",
    }
}

impl fmt::Display for EmployeeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let employee = self.employee;
        let variant = employee.variant();

        writeln!(f)?;
        writeln!(f, "{BOX_RULE}")?;
        writeln!(f, "{}", banner(variant))?;
        writeln!(f, "{BOX_RULE}")?;
        writeln!(f, "  | Name:        {}", employee.name())?;
        writeln!(f, "  | Birth Date:  {}", employee.birth_date())?;
        writeln!(f, "  | Salary:      ${}", employee.salary(self.rates))?;
        match variant {
            VariantKind::OfficeEmployee => {
                writeln!(f, "  | Working Days: {}", employee.extra_field())?
            }
            VariantKind::Worker => writeln!(f, "  | Products:    {}", employee.extra_field())?,
        }
        writeln!(f, "{BOX_RULE}")
    }
}

/// Renders one employee as a boxed card.
///
/// # Example
///
/// ```
/// use employee_payroll::config::PayRates;
/// use employee_payroll::models::Employee;
/// use employee_payroll::report::render_employee;
///
/// let card = render_employee(&Employee::worker("Leo", "02/02/1992", 3), &PayRates::default());
/// assert!(card.contains("| Salary:      $15000"));
/// assert!(card.contains("| Products:    3"));
/// ```
pub fn render_employee(employee: &Employee, rates: &PayRates) -> String {
    EmployeeCard::new(employee, rates).to_string()
}

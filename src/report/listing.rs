//! Registry listing and salary summary.

use std::fmt;

use crate::registry::EmployeeRegistry;

use super::card::{BOX_RULE, EmployeeCard};

pub(crate) const DOUBLE_RULE: &str = "========================================";

/// Displays every enrolled employee with 1-based numbering, or a fixed
/// notice when the registry is empty.
#[derive(Debug, Clone, Copy)]
pub struct RegistryListing<'a> {
    registry: &'a EmployeeRegistry,
}

impl<'a> RegistryListing<'a> {
    /// Creates a listing over `registry`.
    pub fn new(registry: &'a EmployeeRegistry) -> Self {
        Self { registry }
    }
}

impl fmt::Display for RegistryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.registry.is_empty() {
            writeln!(f)?;
            writeln!(f, "{BOX_RULE}")?;
            writeln!(f, "  |    No employees to show     |")?;
            return writeln!(f, "{BOX_RULE}");
        }

        writeln!(f)?;
        writeln!(f, "{DOUBLE_RULE}")?;
        writeln!(f, "         ALL EMPLOYEES ({})", self.registry.len())?;
        writeln!(f, "{DOUBLE_RULE}")?;

        let rates = self.registry.rates();
        for (index, employee) in self.registry.enumerate() {
            write!(f, "\n  --- Employee #{index} ---")?;
            write!(f, "{}", EmployeeCard::new(employee, rates))?;
        }

        writeln!(f)?;
        writeln!(f, "{DOUBLE_RULE}")?;
        writeln!(f, "          End of List")?;
        writeln!(f, "{DOUBLE_RULE}")
    }
}

/// Renders the full registry listing.
pub fn render_listing(registry: &EmployeeRegistry) -> String {
    RegistryListing::new(registry).to_string()
}

/// Renders the boxed total payroll figure.
///
/// # Example
///
/// ```
/// use employee_payroll::report::render_salary_summary;
///
/// assert!(render_salary_summary(35_000).contains("| Total Payroll: $35000"));
/// ```
pub fn render_salary_summary(total_payroll: i128) -> String {
    format!(
        "\n{BOX_RULE}\n  |       SALARY SUMMARY        |\n{BOX_RULE}\n  | Total Payroll: ${total_payroll}\n{BOX_RULE}\n"
    )
}

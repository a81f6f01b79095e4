//! Parsing of raw operator input into domain values.

use std::str::FromStr;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{DEFAULT_BIRTH_DATE, DEFAULT_NAME, Employee, VariantKind};

/// An entry in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register one or more employees.
    Register,
    /// Show every enrolled employee.
    Display,
    /// Show the total payroll.
    Total,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Parses a menu number, returning `None` for anything unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::Display),
            "3" => Some(MenuChoice::Total),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parses a whole number typed for `field`.
pub fn parse_number<T: FromStr>(field: &str, raw: &str) -> PayrollResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| PayrollError::MalformedNumericInput {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Field values collected for a new employee.
///
/// A blank name or birth date is replaced by the record defaults when the
/// intake is converted into an [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeIntake {
    /// The kind chosen by the operator.
    pub variant: VariantKind,
    /// Name as typed.
    pub name: String,
    /// Birth date as typed.
    pub birth_date: String,
    /// Working days or products.
    pub extra_field: i32,
}

fn or_default(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

impl From<EmployeeIntake> for Employee {
    fn from(intake: EmployeeIntake) -> Self {
        Employee::new(
            intake.variant,
            or_default(intake.name, DEFAULT_NAME),
            or_default(intake.birth_date, DEFAULT_BIRTH_DATE),
            intake.extra_field,
        )
    }
}

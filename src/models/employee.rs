//! Employee model and related types.
//!
//! An [`Employee`] carries identity fields shared by every record plus an
//! [`EmployeeKind`] holding the variant-specific pay basis. Salary is never
//! stored; it is recomputed from the pay basis and the pay rates each time it
//! is asked for.
//!
//! Pay basis values and rates are `i32`, so their product always fits in the
//! `i64` salary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PayRates;
use crate::error::PayrollError;

/// Name given to a record when none is supplied.
pub const DEFAULT_NAME: &str = "UNKNOWN";

/// Birth date given to a record when none is supplied.
pub const DEFAULT_BIRTH_DATE: &str = "01/01/1990";

/// The kind of employee, without its pay basis.
///
/// Parsed from operator input: the menu numbers `1` and `2`, or the names
/// `office` and `worker` (case-insensitive).
///
/// # Examples
///
/// ```
/// use employee_payroll::models::VariantKind;
///
/// assert_eq!("1".parse::<VariantKind>().unwrap(), VariantKind::OfficeEmployee);
/// assert_eq!("Worker".parse::<VariantKind>().unwrap(), VariantKind::Worker);
/// assert!("3".parse::<VariantKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    /// Paid per working day.
    OfficeEmployee,
    /// Paid per product.
    Worker,
}

impl VariantKind {
    /// Human-readable name of the kind.
    pub fn label(self) -> &'static str {
        match self {
            VariantKind::OfficeEmployee => "Office Employee",
            VariantKind::Worker => "Worker",
        }
    }

    /// Label of the variant-specific field.
    pub fn extra_field_label(self) -> &'static str {
        match self {
            VariantKind::OfficeEmployee => "Working Days",
            VariantKind::Worker => "Products",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VariantKind {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "office" | "office_employee" => Ok(VariantKind::OfficeEmployee),
            "2" | "worker" => Ok(VariantKind::Worker),
            _ => Err(PayrollError::InvalidVariantKind {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// The pay basis of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Salaried by working days.
    OfficeEmployee {
        /// Number of days worked.
        working_days: i32,
    },
    /// Salaried by units produced.
    Worker {
        /// Number of products made.
        products: i32,
    },
}

impl EmployeeKind {
    /// Creates a pay basis of the given kind.
    pub fn new(variant: VariantKind, extra_field: i32) -> Self {
        match variant {
            VariantKind::OfficeEmployee => EmployeeKind::OfficeEmployee {
                working_days: extra_field,
            },
            VariantKind::Worker => EmployeeKind::Worker {
                products: extra_field,
            },
        }
    }

    /// Returns the kind tag.
    pub fn variant(&self) -> VariantKind {
        match self {
            EmployeeKind::OfficeEmployee { .. } => VariantKind::OfficeEmployee,
            EmployeeKind::Worker { .. } => VariantKind::Worker,
        }
    }

    /// Returns the variant-specific field (working days or products).
    pub fn extra_field(&self) -> i32 {
        match *self {
            EmployeeKind::OfficeEmployee { working_days } => working_days,
            EmployeeKind::Worker { products } => products,
        }
    }

    /// Returns the rate per unit of the extra field.
    pub fn rate(&self, rates: &PayRates) -> i32 {
        match self {
            EmployeeKind::OfficeEmployee { .. } => rates.daily_rate,
            EmployeeKind::Worker { .. } => rates.unit_rate,
        }
    }

    /// Computes the salary for this pay basis.
    pub fn salary(&self, rates: &PayRates) -> i64 {
        i64::from(self.extra_field()) * i64::from(self.rate(rates))
    }
}

/// Represents an employee record.
///
/// The kind is fixed at creation. Name, birth date and the pay basis value can
/// only be changed through the explicit setters.
///
/// # Examples
///
/// ```
/// use employee_payroll::config::PayRates;
/// use employee_payroll::models::Employee;
///
/// let rates = PayRates::default();
///
/// let ana = Employee::office("Ana", "01/01/1990", 20);
/// assert_eq!(ana.salary(&rates), 20_000);
///
/// let leo = Employee::worker("Leo", "02/02/1992", 3);
/// assert_eq!(leo.salary(&rates), 15_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    birth_date: String,
    kind: EmployeeKind,
}

impl Employee {
    /// Creates a record of the requested kind.
    pub fn new(
        variant: VariantKind,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        extra_field: i32,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            kind: EmployeeKind::new(variant, extra_field),
        }
    }

    /// Creates an office employee paid by working days.
    pub fn office(name: impl Into<String>, birth_date: impl Into<String>, working_days: i32) -> Self {
        Self::new(VariantKind::OfficeEmployee, name, birth_date, working_days)
    }

    /// Creates a worker paid by products.
    pub fn worker(name: impl Into<String>, birth_date: impl Into<String>, products: i32) -> Self {
        Self::new(VariantKind::Worker, name, birth_date, products)
    }

    /// Creates a record with placeholder identity and a zero pay basis.
    pub fn placeholder(variant: VariantKind) -> Self {
        Self::new(variant, DEFAULT_NAME, DEFAULT_BIRTH_DATE, 0)
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's birth date as entered.
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    /// Returns the pay basis.
    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// Returns the kind tag.
    pub fn variant(&self) -> VariantKind {
        self.kind.variant()
    }

    /// Returns working days for office employees, products for workers.
    pub fn extra_field(&self) -> i32 {
        self.kind.extra_field()
    }

    /// Computes the salary at the given rates.
    pub fn salary(&self, rates: &PayRates) -> i64 {
        self.kind.salary(rates)
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the birth date.
    pub fn set_birth_date(&mut self, birth_date: impl Into<String>) {
        self.birth_date = birth_date.into();
    }

    /// Replaces the pay basis value, keeping the kind.
    pub fn set_extra_field(&mut self, value: i32) {
        self.kind = EmployeeKind::new(self.kind.variant(), value);
    }
}

//! Text rendering for employees, the registry listing, and payroll totals.
//!
//! Rendering is pure: every function returns a `String` and leaves printing to
//! the caller.

mod card;
mod listing;

pub use card::{EmployeeCard, render_employee};
pub use listing::{RegistryListing, render_listing, render_salary_summary};

pub(crate) use listing::DOUBLE_RULE;

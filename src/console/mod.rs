//! Console front end for the employee registry.
//!
//! The session prompts for employee details, validates the employee type and
//! numeric fields, and prints listings and totals. All of the crate's I/O
//! lives here; the registry and models only ever see well-typed values.

mod intake;
mod session;

pub use intake::{EmployeeIntake, MenuChoice, parse_number};
pub use session::Session;

//! Employee registry and payroll aggregation.
//!
//! This crate models employees paid by working days or by units produced,
//! keeps them in an ordered registry, and computes individual salaries and the
//! total payroll. A console front end drives enrollment and reporting.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;

//! Integration tests for the employee payroll crate.
//!
//! This test suite covers:
//! - Salary rules for office employees and workers
//! - Registry enrollment, enumeration and total payroll
//! - Rendering of cards, listings and summaries
//! - Configured pay rates
//! - Full console sessions over in-memory streams

use std::io::Cursor;

use employee_payroll::config::{ConfigLoader, PayRates};
use employee_payroll::console::Session;
use employee_payroll::models::{Employee, VariantKind};
use employee_payroll::registry::EmployeeRegistry;
use employee_payroll::report::{render_employee, render_listing, render_salary_summary};

// =============================================================================
// Test Helpers
// =============================================================================

fn ana() -> Employee {
    Employee::new(VariantKind::OfficeEmployee, "Ana", "01/01/1990", 20)
}

fn leo() -> Employee {
    Employee::new(VariantKind::Worker, "Leo", "02/02/1992", 3)
}

fn run_script(registry: EmployeeRegistry, script: &str) -> (EmployeeRegistry, String) {
    let mut output = Vec::new();
    let mut session = Session::new(Cursor::new(script.as_bytes()), &mut output, registry);
    session.run().expect("session failed");
    let registry = session.into_registry();
    (registry, String::from_utf8(output).expect("output was not UTF-8"))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_a_office_employee_salary() {
    let mut registry = EmployeeRegistry::new();
    registry.enroll(ana());
    assert_eq!(registry.salary_of(registry.get(1).unwrap()), 20_000);
}

#[test]
fn test_scenario_b_worker_salary() {
    let mut registry = EmployeeRegistry::new();
    registry.enroll(leo());
    assert_eq!(registry.salary_of(registry.get(1).unwrap()), 15_000);
}

#[test]
fn test_scenario_c_total_payroll() {
    let mut registry = EmployeeRegistry::new();
    registry.enroll(ana());
    registry.enroll(leo());
    assert_eq!(registry.total_payroll(), 35_000);

    let summary = registry.summary();
    assert_eq!(summary.headcount, 2);
    assert_eq!(summary.office_employees, 1);
    assert_eq!(summary.workers, 1);
    assert_eq!(summary.total_payroll, 35_000);
}

#[test]
fn test_scenario_d_empty_registry() {
    let registry = EmployeeRegistry::new();
    assert_eq!(registry.enumerate().count(), 0);
    assert_eq!(registry.total_payroll(), 0);
    assert!(render_listing(&registry).contains("No employees to show"));
}

#[test]
fn test_updated_extra_field_is_reflected_in_total() {
    let mut employee = ana();
    employee.set_extra_field(10);

    let mut registry = EmployeeRegistry::new();
    registry.enroll(employee);
    registry.enroll(leo());
    assert_eq!(registry.total_payroll(), 25_000);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_card_and_listing_agree() {
    let mut registry = EmployeeRegistry::new();
    registry.enroll(ana());

    let card = render_employee(&ana(), &PayRates::default());
    let listing = render_listing(&registry);
    assert!(listing.contains(&card));
}

#[test]
fn test_summary_matches_registry_total() {
    let mut registry = EmployeeRegistry::new();
    registry.enroll(ana());
    registry.enroll(leo());
    assert!(render_salary_summary(registry.total_payroll()).contains("$35000"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_shipped_config_matches_default_rates() {
    let loader = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    assert_eq!(loader.rates(), PayRates::default());
}

#[test]
fn test_registry_with_configured_rates() {
    let loader = ConfigLoader::load("./config/payroll.yaml").expect("Failed to load config");
    let mut registry = EmployeeRegistry::with_rates(loader.rates());
    registry.enroll(ana());
    registry.enroll(leo());
    assert_eq!(registry.total_payroll(), 35_000);
}

#[test]
fn test_card_listing_and_total_agree_under_custom_rates() {
    let rates = PayRates {
        daily_rate: 1500,
        unit_rate: 2500,
    };
    let mut registry = EmployeeRegistry::with_rates(rates);
    registry.enroll(ana());
    registry.enroll(leo());

    assert_eq!(registry.salary_of(&ana()), 30_000);
    assert_eq!(registry.salary_of(&leo()), 7_500);
    assert_eq!(registry.total_payroll(), 37_500);
    assert_eq!(registry.summary().total_payroll, 37_500);

    let listing = render_listing(&registry);
    assert!(listing.contains("| Salary:      $30000\n"));
    assert!(listing.contains("| Salary:      $7500\n"));
    assert!(render_employee(&ana(), registry.rates()).contains("$30000"));
}

// =============================================================================
// Console sessions
// =============================================================================

#[test]
fn test_session_register_display_total_exit() {
    let script = concat!(
        "1\n", // register
        "2\n", // two employees
        "1\n", "Ana\n", "01/01/1990\n", "20\n",
        "2\n", "Leo\n", "02/02/1992\n", "3\n",
        "2\n", // display
        "3\n", // total
        "0\n", // exit
    );
    let (registry, output) = run_script(EmployeeRegistry::new(), script);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.total_payroll(), 35_000);

    assert!(output.contains("Registration Complete: 2 employee(s)"));
    assert!(output.contains("ALL EMPLOYEES (2)"));
    assert!(output.contains("  --- Employee #2 ---"));
    assert!(output.contains("  |      OFFICE EMPLOYEE        |"));
    assert!(output.contains("  |          WORKER             |"));
    assert!(output.contains("  | Total Payroll: $35000"));
    assert!(output.trim_end().ends_with("========================================"));
}

#[test]
fn test_session_blank_identity_gets_defaults() {
    let (registry, _) = run_script(EmployeeRegistry::new(), "1\n1\n2\n\n\n4\n0\n");
    let employee = registry.get(1).unwrap();
    assert_eq!(employee.name(), "UNKNOWN");
    assert_eq!(employee.birth_date(), "01/01/1990");
    assert_eq!(registry.salary_of(employee), 20_000);
}

#[test]
fn test_session_appends_to_existing_registry() {
    let mut registry = EmployeeRegistry::new();
    registry.enroll(ana());

    let (registry, output) = run_script(registry, "1\n1\n2\nLeo\n02/02/1992\n3\n2\n0\n");
    let names: Vec<&str> = registry.enumerate().map(|(_, e)| e.name()).collect();
    assert_eq!(names, vec!["Ana", "Leo"]);
    assert!(output.find("Name:        Ana").unwrap() < output.find("Name:        Leo").unwrap());
}

#[test]
fn test_session_rejects_bad_count_then_accepts() {
    let (registry, output) = run_script(EmployeeRegistry::new(), "1\nmany\n0\n0\n");
    assert!(registry.is_empty());
    assert!(output.contains("[!] Please enter a whole number."));
    assert!(output.contains("Registration Complete: 0 employee(s)"));
}

#[test]
fn test_session_rejects_number_beyond_field_range() {
    let script = concat!(
        "1\n", "1\n", "1\n", "Ana\n", "01/01/1990\n",
        "9223372036854775807\n", // does not fit a working-day count
        "3\n",
        "3\n", // total
        "0\n",
    );
    let (registry, output) = run_script(EmployeeRegistry::new(), script);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.total_payroll(), 3000);
    assert!(output.contains("[!] Please enter a whole number."));
    assert!(output.contains("  | Total Payroll: $3000\n"));
}

#[test]
fn test_session_ends_cleanly_on_empty_input() {
    let (registry, output) = run_script(EmployeeRegistry::new(), "");
    assert!(registry.is_empty());
    assert!(output.contains("Your choice: "));
}

//! Interactive menu session over a pair of text streams.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::PayrollResult;
use crate::models::VariantKind;
use crate::registry::EmployeeRegistry;
use crate::report::{DOUBLE_RULE, RegistryListing, render_salary_summary};

use super::intake::{EmployeeIntake, MenuChoice, parse_number};

const SINGLE_RULE: &str = "----------------------------------------";

/// A menu-driven session that owns the registry it fills.
///
/// Reads operator input line by line from `input` and writes prompts and
/// reports to `output`. End of input ends the session without error; anything
/// enrolled up to that point stays in the registry.
pub struct Session<R, W> {
    input: R,
    output: W,
    registry: EmployeeRegistry,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing registry.
    pub fn new(input: R, output: W, registry: EmployeeRegistry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    /// Returns the registry.
    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    /// Ends the session, handing back the registry.
    pub fn into_registry(self) -> EmployeeRegistry {
        self.registry
    }

    /// Runs the main menu until the operator exits or input ends.
    pub fn run(&mut self) -> PayrollResult<()> {
        let rates = *self.registry.rates();
        info!(
            daily_rate = rates.daily_rate,
            unit_rate = rates.unit_rate,
            "Starting console session"
        );

        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                info!("Input closed, ending session");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Register) => {
                    if self.register_employees()?.is_none() {
                        info!("Input closed during registration, ending session");
                        return Ok(());
                    }
                }
                Some(MenuChoice::Display) => self.display_all()?,
                Some(MenuChoice::Total) => self.show_total()?,
                Some(MenuChoice::Exit) => {
                    write!(
                        self.output,
                        "\n{DOUBLE_RULE}\n    Thank you for using the system!     \n{DOUBLE_RULE}\n\n"
                    )?;
                    self.output.flush()?;
                    return Ok(());
                }
                None => {
                    warn!(choice = %line.trim(), "Invalid menu choice");
                    writeln!(self.output, "\n  [!] Invalid choice. Please try again.")?;
                }
            }
        }
    }

    /// Asks for a number of employees and enrolls that many.
    ///
    /// Returns the number registered, or `None` if input ended first.
    pub fn register_employees(&mut self) -> PayrollResult<Option<usize>> {
        write!(
            self.output,
            "\n{DOUBLE_RULE}\n       EMPLOYEE REGISTRATION SYSTEM     \n{DOUBLE_RULE}\n\n"
        )?;

        let Some(count) =
            self.prompt_number::<usize>("How many employees to register? ", "employee count")?
        else {
            return Ok(None);
        };
        writeln!(self.output)?;

        let mut registered = 0;
        while registered < count {
            let slot = registered + 1;
            write!(
                self.output,
                "{SINGLE_RULE}\n          Employee #{slot} of {count}\n{SINGLE_RULE}\n\n"
            )?;
            write!(
                self.output,
                "  Select employee type:\n    [1] Office Employee\n    [2] Worker\n\n"
            )?;

            let Some(raw) = self.prompt("  Your choice: ")? else {
                return Ok(None);
            };
            writeln!(self.output)?;

            let variant = match raw.parse::<VariantKind>() {
                Ok(variant) => variant,
                Err(err) => {
                    warn!(slot, error = %err, "Rejected employee type");
                    writeln!(self.output, "  [!] Invalid choice. Please try again.\n")?;
                    continue;
                }
            };

            writeln!(self.output, "  >> Adding {variant}\n")?;
            let Some(intake) = self.enter_info(variant)? else {
                return Ok(None);
            };
            self.registry.enroll(intake.into());
            registered += 1;

            writeln!(self.output, "\n  [OK] Employee registered successfully!\n")?;
        }

        write!(
            self.output,
            "{DOUBLE_RULE}\n   Registration Complete: {count} employee(s)\n{DOUBLE_RULE}\n\n"
        )?;
        info!(count, enrolled = self.registry.len(), "Registration complete");

        Ok(Some(count))
    }

    /// Prints every enrolled employee.
    pub fn display_all(&mut self) -> PayrollResult<()> {
        write!(self.output, "{}", RegistryListing::new(&self.registry))?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints the total payroll.
    pub fn show_total(&mut self) -> PayrollResult<()> {
        let total = self.registry.total_payroll();
        info!(total = %total, headcount = self.registry.len(), "Reported total payroll");
        write!(self.output, "{}", render_salary_summary(total))?;
        self.output.flush()?;
        Ok(())
    }

    fn enter_info(&mut self, variant: VariantKind) -> PayrollResult<Option<EmployeeIntake>> {
        write!(self.output, "  +----- Enter Employee Info -----+\n\n")?;

        let Some(name) = self.prompt("  Enter Name:        ")? else {
            return Ok(None);
        };
        let Some(birth_date) = self.prompt("  Enter Birth Date:  ")? else {
            return Ok(None);
        };

        let extra_prompt = match variant {
            VariantKind::OfficeEmployee => "  Enter Working Days: ",
            VariantKind::Worker => "  Enter No. of Products: ",
        };
        let Some(extra_field) =
            self.prompt_number::<i32>(extra_prompt, variant.extra_field_label())?
        else {
            return Ok(None);
        };

        write!(self.output, "\n  +-------------------------------+\n")?;

        Ok(Some(EmployeeIntake {
            variant,
            name,
            birth_date,
            extra_field,
        }))
    }

    fn write_menu(&mut self) -> PayrollResult<()> {
        write!(
            self.output,
            "\n{DOUBLE_RULE}\n        EMPLOYEE MANAGEMENT SYSTEM      \n{DOUBLE_RULE}\n\n"
        )?;
        write!(
            self.output,
            "  [1] Register Employees\n  [2] Display All Employees\n  [3] Calculate Total Salary\n  [0] Exit\n\n  Your choice: "
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> PayrollResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str, field: &str) -> PayrollResult<Option<T>> {
        loop {
            let Some(raw) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse_number(field, &raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    warn!(error = %err, "Rejected numeric input");
                    writeln!(self.output, "  [!] Please enter a whole number.")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> PayrollResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

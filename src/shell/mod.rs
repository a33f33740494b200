//! Interactive console shell: credential gate, menu loop, dispatch.
//!
//! The shell is the only component that talks to the terminal. It blocks on
//! each input, processes one command to completion, then blocks again.
//! User mistakes (bad menu choice, malformed number, search miss) are
//! printed and the loop continues; only authentication failure and terminal
//! I/O failure end the session with an error.
//!
//! The shell is generic over its reader and writer so tests can script
//! whole sessions against in-memory buffers.

mod menu;

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;
use crate::promotion::{self, PromotedField};
use crate::report;
use crate::roster::Roster;

pub use menu::MenuChoice;

use menu::MENU;

/// The interactive session: settings, terminal handles, and the roster.
pub struct Shell<R, W> {
    input: R,
    output: W,
    settings: Settings,
    roster: Roster,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with an empty roster.
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Self {
            input,
            output,
            settings,
            roster: Roster::new(),
        }
    }

    /// The roster owned by this session.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs the whole session: credential gate, then the menu loop.
    ///
    /// # Errors
    ///
    /// [`PayrollError::AuthenticationFailed`] when the credential check
    /// fails (no retry), or [`PayrollError::Io`] when the terminal itself
    /// breaks. All other conditions are handled inside the loop.
    pub fn run(&mut self) -> PayrollResult<()> {
        self.login()?;
        self.menu_loop()
    }

    fn login(&mut self) -> PayrollResult<()> {
        writeln!(self.output, "Login Required")?;
        let username = self.prompt("Username: ")?.unwrap_or_default();
        let password = self.prompt("Password: ")?.unwrap_or_default();

        if !self.settings.credentials.verify(&username, &password) {
            writeln!(self.output, "Invalid credentials. Exiting.")?;
            warn!(username = %username, "Login rejected");
            return Err(PayrollError::AuthenticationFailed);
        }

        writeln!(self.output, "Login successful!\n")?;
        info!(username = %username, "Login accepted");
        Ok(())
    }

    fn menu_loop(&mut self) -> PayrollResult<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                // EOF: the terminal is gone, leave quietly.
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            };

            let Ok(number) = line.trim().parse::<u32>() else {
                writeln!(self.output, "Please enter a valid number.")?;
                continue;
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };

            debug!(choice = ?choice, "Dispatching menu choice");
            match choice {
                MenuChoice::AddFullTime => self.add_full_time()?,
                MenuChoice::AddPartTime => self.add_part_time()?,
                MenuChoice::RemoveEmployee => self.remove_employee()?,
                MenuChoice::DisplayAll => self.display_all()?,
                MenuChoice::DisplayByDepartment => self.display_by_department()?,
                MenuChoice::SearchEmployee => self.search_employee()?,
                MenuChoice::SortBySalary => self.sort_by_salary()?,
                MenuChoice::ExportReport => self.export_report()?,
                MenuChoice::ApplyPromotions => self.apply_promotions()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    info!("Session ended");
                    return Ok(());
                }
            }
        }
    }

    /// Reads one line, without its line ending. `None` means EOF.
    fn read_line(&mut self) -> PayrollResult<Option<String>> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> PayrollResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts for a numeric field. `None` aborts the current operation:
    /// either EOF, or a malformed value (reported, nothing mutated).
    fn prompt_parse<T: FromStr>(&mut self, label: &str) -> PayrollResult<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Please enter a valid number.")?;
                Ok(None)
            }
        }
    }

    fn add_full_time(&mut self) -> PayrollResult<()> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(id) = self.prompt_parse::<u32>("ID: ")? else {
            return Ok(());
        };
        let Some(department) = self.prompt("Department: ")? else {
            return Ok(());
        };
        let Some(monthly_salary) = self.prompt_parse::<Decimal>("Monthly Salary: ")? else {
            return Ok(());
        };
        let Some(bonus) = self.prompt_parse::<Decimal>("Bonus: ")? else {
            return Ok(());
        };

        info!(id, name = %name, "Added full-time employee");
        self.roster.add(EmployeeRecord::full_time(
            name,
            id,
            department,
            monthly_salary,
            bonus,
        ));
        Ok(())
    }

    fn add_part_time(&mut self) -> PayrollResult<()> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(());
        };
        let Some(id) = self.prompt_parse::<u32>("ID: ")? else {
            return Ok(());
        };
        let Some(department) = self.prompt("Department: ")? else {
            return Ok(());
        };
        let Some(hours_worked) = self.prompt_parse::<u32>("Hours Worked: ")? else {
            return Ok(());
        };
        let Some(hourly_rate) = self.prompt_parse::<Decimal>("Hourly Rate: ")? else {
            return Ok(());
        };

        info!(id, name = %name, "Added part-time employee");
        self.roster.add(EmployeeRecord::part_time(
            name,
            id,
            department,
            hours_worked,
            hourly_rate,
        ));
        Ok(())
    }

    fn remove_employee(&mut self) -> PayrollResult<()> {
        let Some(id) = self.prompt_parse::<u32>("Enter ID to remove: ")? else {
            return Ok(());
        };

        let removed = self.roster.remove(id);
        if removed == 0 {
            writeln!(self.output, "No employee found with ID {id}.")?;
        } else {
            writeln!(self.output, "Removed {removed} record(s).")?;
            info!(id, removed, "Removed employee records");
        }
        Ok(())
    }

    fn display_all(&mut self) -> PayrollResult<()> {
        if self.roster.is_empty() {
            writeln!(self.output, "No employees to display.")?;
            return Ok(());
        }
        for record in self.roster.iter() {
            writeln!(self.output, "{record}")?;
        }
        Ok(())
    }

    fn display_by_department(&mut self) -> PayrollResult<()> {
        let groups = self.roster.group_by_department();
        for (department, records) in &groups {
            writeln!(self.output, "Department: {department}")?;
            for record in records {
                writeln!(self.output, "  {record}")?;
            }
        }
        Ok(())
    }

    fn search_employee(&mut self) -> PayrollResult<()> {
        let Some(query) = self.prompt("Enter name or ID: ")? else {
            return Ok(());
        };

        match self.roster.find_by_name_or_id(query.trim()) {
            Some(record) => writeln!(self.output, "Found: {record}")?,
            None => writeln!(self.output, "Employee not found.")?,
        }
        Ok(())
    }

    fn sort_by_salary(&mut self) -> PayrollResult<()> {
        self.roster.sort_by_salary_descending();
        writeln!(self.output, "Sorted by salary:")?;
        self.display_all()
    }

    fn export_report(&mut self) -> PayrollResult<()> {
        match report::write_report(&self.settings.report_path, self.roster.iter()) {
            Ok(()) => {
                writeln!(
                    self.output,
                    "Report exported to {}",
                    self.settings.report_path.display()
                )?;
                info!(
                    path = %self.settings.report_path.display(),
                    records = self.roster.len(),
                    "Report exported"
                );
            }
            Err(err) => {
                // Export failure is local: report it and keep the session.
                warn!(error = %err, "Report export failed");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(())
    }

    fn apply_promotions(&mut self) -> PayrollResult<()> {
        let notices = promotion::apply_promotions(&mut self.roster);
        for notice in &notices {
            let label = match notice.field {
                PromotedField::Bonus => "Bonus increased",
                PromotedField::HourlyRate => "Hourly rate increased",
            };
            writeln!(self.output, "Promoted ({label}): {}", notice.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (PayrollResult<()>, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(
            Settings::default(),
            Cursor::new(input.to_string()),
            &mut output,
        );
        let result = shell.run();
        drop(shell);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let (result, output) = run_session("admin\nwrong\n");
        assert!(matches!(result, Err(PayrollError::AuthenticationFailed)));
        assert!(output.contains("Invalid credentials. Exiting."));
        assert!(!output.contains("Payroll System Menu"));
    }

    #[test]
    fn test_login_rejects_wrong_username() {
        let (result, _) = run_session("root\nadmin123\n");
        assert!(matches!(result, Err(PayrollError::AuthenticationFailed)));
    }

    #[test]
    fn test_login_rejects_missing_input() {
        let (result, _) = run_session("");
        assert!(matches!(result, Err(PayrollError::AuthenticationFailed)));
    }

    #[test]
    fn test_login_accepts_default_credentials_then_exits() {
        let (result, output) = run_session("admin\nadmin123\n9\n");
        assert!(result.is_ok());
        assert!(output.contains("Login successful!"));
        assert!(output.contains("--- Payroll System Menu ---"));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_unrecognized_choice_reports_and_continues() {
        let (result, output) = run_session("admin\nadmin123\n42\n9\n");
        assert!(result.is_ok());
        assert!(output.contains("Invalid choice."));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_non_numeric_choice_reports_and_continues() {
        let (result, output) = run_session("admin\nadmin123\nhello\n9\n");
        assert!(result.is_ok());
        assert!(output.contains("Please enter a valid number."));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_eof_in_menu_exits_cleanly() {
        let (result, output) = run_session("admin\nadmin123\n");
        assert!(result.is_ok());
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_display_all_on_empty_roster() {
        let (result, output) = run_session("admin\nadmin123\n4\n9\n");
        assert!(result.is_ok());
        assert!(output.contains("No employees to display."));
    }

    #[test]
    fn test_add_full_time_then_display() {
        let input = "admin\nadmin123\n1\nAlice\n1\nEng\n60000\n0\n4\n9\n";
        let (result, output) = run_session(input);
        assert!(result.is_ok());
        assert!(output.contains("Employee [Name=Alice, ID=1, Department=Eng, Salary=60000]"));
    }

    #[test]
    fn test_malformed_salary_aborts_add_without_state_change() {
        let input = "admin\nadmin123\n1\nAlice\n1\nEng\nlots\n4\n9\n";
        let (result, output) = run_session(input);
        assert!(result.is_ok());
        assert!(output.contains("Please enter a valid number."));
        // The aborted add left the roster empty.
        assert!(output.contains("No employees to display."));
    }

    #[test]
    fn test_search_hit_and_miss() {
        let input = "admin\nadmin123\n2\nBob\n2\nEng\n170\n20\n6\n2\n6\ncarol\n9\n";
        let (result, output) = run_session(input);
        assert!(result.is_ok());
        assert!(output.contains("Found: Employee [Name=Bob, ID=2, Department=Eng, Salary=3400]"));
        assert!(output.contains("Employee not found."));
    }

    #[test]
    fn test_remove_miss_reports_message() {
        let (result, output) = run_session("admin\nadmin123\n3\n7\n9\n");
        assert!(result.is_ok());
        assert!(output.contains("No employee found with ID 7."));
    }

    #[test]
    fn test_remove_deletes_every_matching_record() {
        let input = "admin\nadmin123\n\
            1\nAlice\n7\nEng\n60000\n0\n\
            2\nBob\n7\nOps\n100\n25\n\
            3\n7\n\
            4\n9\n";
        let (result, output) = run_session(input);
        assert!(result.is_ok());
        assert!(output.contains("Removed 2 record(s)."));
        assert!(output.contains("No employees to display."));
    }

    #[test]
    fn test_promotions_print_one_notice_per_promoted_record() {
        let input = "admin\nadmin123\n\
            1\nAlice\n1\nEng\n60000\n0\n\
            2\nBob\n2\nEng\n170\n20\n\
            1\nCarol\n3\nOps\n48000\n0\n\
            10\n9\n";
        let (result, output) = run_session(input);
        assert!(result.is_ok());
        assert!(output.contains("Promoted (Bonus increased): Alice"));
        assert!(output.contains("Promoted (Hourly rate increased): Bob"));
        assert!(!output.contains("Promoted (Bonus increased): Carol"));
    }

    #[test]
    fn test_sort_displays_descending_order() {
        let input = "admin\nadmin123\n\
            2\nBob\n2\nEng\n170\n20\n\
            1\nAlice\n1\nEng\n60000\n0\n\
            7\n9\n";
        let (result, output) = run_session(input);
        assert!(result.is_ok());

        let sorted_at = output.find("Sorted by salary:").unwrap();
        let alice_at = output.find("Employee [Name=Alice").unwrap();
        let bob_at = output.find("Employee [Name=Bob").unwrap();
        assert!(sorted_at < alice_at);
        assert!(alice_at < bob_at);
    }

    #[test]
    fn test_export_failure_is_reported_and_session_continues() {
        let mut settings = Settings::default();
        settings.report_path = std::path::PathBuf::from("/nonexistent-dir/payroll_report.txt");

        let mut output = Vec::new();
        let input = "admin\nadmin123\n1\nAlice\n1\nEng\n60000\n0\n8\n4\n9\n";
        let mut shell = Shell::new(settings, Cursor::new(input.to_string()), &mut output);
        let result = shell.run();
        drop(shell);
        let output = String::from_utf8(output).unwrap();

        assert!(result.is_ok());
        assert!(output.contains("Error writing report"));
        // The roster survived the failed export.
        assert!(output.contains("Employee [Name=Alice"));
        assert!(output.contains("Exiting..."));
    }
}

//! Report rendering and export.
//!
//! Formatting lives in one place so output changes stay localized. Each
//! record renders to the canonical `Employee [...]` line; the export writes
//! those lines to a text file, overwriting any previous report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

/// Renders one newline-terminated line per record.
pub fn format_report<'a>(records: impl IntoIterator<Item = &'a EmployeeRecord>) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}

/// Writes the report to `path`, one record per line.
///
/// The destination is created or truncated, written, and closed on all exit
/// paths. Failure maps to [`PayrollError::ReportExport`]; the caller reports
/// it and carries on, roster state untouched.
pub fn write_report<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a EmployeeRecord>,
) -> PayrollResult<()> {
    let export_err = |message: String| PayrollError::ReportExport {
        path: path.display().to_string(),
        message,
    };

    let mut file = File::create(path).map_err(|e| export_err(e.to_string()))?;
    for record in records {
        writeln!(file, "{record}").map_err(|e| export_err(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_records() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord::full_time("Alice", 1, "Eng", dec("60000"), dec("2000")),
            EmployeeRecord::part_time("Bob", 2, "Eng", 170, dec("70")),
        ]
    }

    #[test]
    fn test_format_report_one_line_per_record() {
        let records = sample_records();
        let report = format_report(&records);

        assert_eq!(
            report,
            "Employee [Name=Alice, ID=1, Department=Eng, Salary=62000]\n\
             Employee [Name=Bob, ID=2, Department=Eng, Salary=11900]\n"
        );
    }

    #[test]
    fn test_format_report_empty_input_is_empty_string() {
        let report = format_report([]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_write_report_creates_file_with_rendered_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payroll_report.txt");
        let records = sample_records();

        write_report(&path, &records).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, format_report(&records));
    }

    #[test]
    fn test_write_report_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payroll_report.txt");
        std::fs::write(&path, "stale contents\n").unwrap();

        let records = sample_records();
        write_report(&path, &records).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.starts_with("Employee [Name=Alice"));
    }

    #[test]
    fn test_write_report_failure_is_report_export_error() {
        let records = sample_records();
        let path = Path::new("/nonexistent-dir/payroll_report.txt");

        let err = write_report(path, &records).unwrap_err();
        match err {
            PayrollError::ReportExport { path, .. } => {
                assert!(path.contains("payroll_report.txt"));
            }
            other => panic!("Expected ReportExport error, got {other:?}"),
        }
    }
}

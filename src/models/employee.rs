//! Employee record model.
//!
//! An [`EmployeeRecord`] carries the fields shared by every employee plus an
//! [`EmployeeKind`] variant with the kind-specific compensation fields. The
//! salary is always derived on demand from the current field values.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind-specific compensation fields of an employee.
///
/// Each variant carries its own field set and salary rule; dispatch is a
/// plain match on the variant, no dynamic machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Salaried employee paid monthly, with an adjustable bonus.
    FullTime {
        /// Fixed monthly salary.
        monthly_salary: Decimal,
        /// Bonus added on top of the monthly salary. Unchecked; may go
        /// negative through [`EmployeeRecord::set_bonus`].
        bonus: Decimal,
    },
    /// Hourly employee paid per hour worked.
    PartTime {
        /// Hours worked in the pay period.
        hours_worked: u32,
        /// Rate paid per hour. Unchecked, like the bonus.
        hourly_rate: Decimal,
    },
}

/// A single employee record.
///
/// Records are owned exclusively by the roster that holds them. The only
/// fields ever mutated after construction are the bonus (full-time) and the
/// hourly rate (part-time), via the promotion pass.
///
/// # Example
///
/// ```
/// use payroll_desk::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let alice = EmployeeRecord::full_time(
///     "Alice",
///     1,
///     "Eng",
///     Decimal::new(60_000, 0),
///     Decimal::ZERO,
/// );
/// assert_eq!(alice.salary(), Decimal::new(60_000, 0));
/// assert_eq!(
///     alice.to_string(),
///     "Employee [Name=Alice, ID=1, Department=Eng, Salary=60000]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    name: String,
    id: u32,
    department: String,
    #[serde(flatten)]
    kind: EmployeeKind,
}

impl EmployeeRecord {
    /// Creates a full-time record.
    pub fn full_time(
        name: impl Into<String>,
        id: u32,
        department: impl Into<String>,
        monthly_salary: Decimal,
        bonus: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            department: department.into(),
            kind: EmployeeKind::FullTime {
                monthly_salary,
                bonus,
            },
        }
    }

    /// Creates a part-time record.
    pub fn part_time(
        name: impl Into<String>,
        id: u32,
        department: impl Into<String>,
        hours_worked: u32,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            department: department.into(),
            kind: EmployeeKind::PartTime {
                hours_worked,
                hourly_rate,
            },
        }
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's numeric id. Uniqueness is not enforced; a roster may
    /// hold several records with the same id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The department the employee belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The kind-specific compensation fields.
    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// Computes the salary from the current field values.
    ///
    /// Full-time: `monthly_salary + bonus`. Part-time:
    /// `hours_worked * hourly_rate`. Never cached, so any field mutation is
    /// reflected immediately.
    pub fn salary(&self) -> Decimal {
        match self.kind {
            EmployeeKind::FullTime {
                monthly_salary,
                bonus,
            } => monthly_salary + bonus,
            EmployeeKind::PartTime {
                hours_worked,
                hourly_rate,
            } => Decimal::from(hours_worked) * hourly_rate,
        }
    }

    /// Replaces the bonus of a full-time record. Unchecked; negative values
    /// are accepted. No-op on a part-time record.
    pub fn set_bonus(&mut self, new_bonus: Decimal) {
        if let EmployeeKind::FullTime { bonus, .. } = &mut self.kind {
            *bonus = new_bonus;
        }
    }

    /// Replaces the hourly rate of a part-time record. Unchecked; no-op on a
    /// full-time record.
    pub fn set_hourly_rate(&mut self, new_rate: Decimal) {
        if let EmployeeKind::PartTime { hourly_rate, .. } = &mut self.kind {
            *hourly_rate = new_rate;
        }
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee [Name={}, ID={}, Department={}, Salary={}]",
            self.name,
            self.id,
            self.department,
            self.salary().normalize()
        )
    }
}

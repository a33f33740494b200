//! Rule-based promotion pass.
//!
//! A promotion pass walks the roster once, in order, and bumps the
//! compensation field of every record that clears its kind's threshold.
//! Thresholds and increments are fixed constants. The pass is deliberately
//! not idempotent: a record that still qualifies on the next pass is bumped
//! again; there is no "already promoted" flag.

use rust_decimal::Decimal;
use tracing::info;

use crate::models::EmployeeKind;
use crate::roster::Roster;

/// Monthly-salary threshold above which a full-time employee is promoted.
/// Strict: a salary exactly at the threshold does not qualify.
pub fn full_time_salary_threshold() -> Decimal {
    Decimal::new(50_000, 0)
}

/// Amount added to the bonus of a promoted full-time employee.
pub fn full_time_bonus_increment() -> Decimal {
    Decimal::new(2_000, 0)
}

/// Hours-worked threshold above which a part-time employee is promoted.
/// Strict, like the salary threshold.
pub const PART_TIME_HOURS_THRESHOLD: u32 = 160;

/// Amount added to the hourly rate of a promoted part-time employee.
pub fn part_time_rate_increment() -> Decimal {
    Decimal::new(50, 0)
}

/// Which compensation field a promotion changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotedField {
    /// The full-time bonus was increased.
    Bonus,
    /// The part-time hourly rate was increased.
    HourlyRate,
}

/// Notification emitted for one promoted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionNotice {
    /// Name of the promoted employee.
    pub name: String,
    /// Id of the promoted employee.
    pub id: u32,
    /// The field the promotion changed.
    pub field: PromotedField,
}

/// Applies the promotion rules to every record in the roster, in order.
///
/// Returns one [`PromotionNotice`] per promoted record; non-promoted records
/// produce nothing.
///
/// # Example
///
/// ```
/// use payroll_desk::models::EmployeeRecord;
/// use payroll_desk::promotion::apply_promotions;
/// use payroll_desk::roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add(EmployeeRecord::full_time(
///     "Alice",
///     1,
///     "Eng",
///     Decimal::new(60_000, 0),
///     Decimal::ZERO,
/// ));
///
/// let notices = apply_promotions(&mut roster);
/// assert_eq!(notices.len(), 1);
/// assert_eq!(roster.iter().next().unwrap().salary(), Decimal::new(62_000, 0));
/// ```
pub fn apply_promotions(roster: &mut Roster) -> Vec<PromotionNotice> {
    let mut notices = Vec::new();

    for record in roster.iter_mut() {
        let kind = *record.kind();
        let field = match kind {
            EmployeeKind::FullTime {
                monthly_salary,
                bonus,
            } if monthly_salary > full_time_salary_threshold() => {
                record.set_bonus(bonus + full_time_bonus_increment());
                Some(PromotedField::Bonus)
            }
            EmployeeKind::PartTime {
                hours_worked,
                hourly_rate,
            } if hours_worked > PART_TIME_HOURS_THRESHOLD => {
                record.set_hourly_rate(hourly_rate + part_time_rate_increment());
                Some(PromotedField::HourlyRate)
            }
            _ => None,
        };

        if let Some(field) = field {
            info!(
                employee_id = record.id(),
                name = record.name(),
                field = ?field,
                "Promotion applied"
            );
            notices.push(PromotionNotice {
                name: record.name().to_string(),
                id: record.id(),
                field,
            });
        }
    }

    notices
}

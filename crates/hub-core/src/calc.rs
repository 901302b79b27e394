//! Derived-field calculations.
//!
//! These are pure functions. Entities expose them through methods
//! (`Payroll::net_salary`, `Attendance::hours_worked`, `Leave::days`) so the
//! derived values are always recomputed from their inputs.

use chrono::{NaiveDate, NaiveTime};

/// `base + bonus − deductions`.
#[must_use]
pub fn net_salary(base: f64, bonus: f64, deductions: f64) -> f64 {
    base + bonus - deductions
}

/// Fractional hours between check-in and check-out.
///
/// Returns `0.0` if either time is absent.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_worked(check_in: Option<NaiveTime>, check_out: Option<NaiveTime>) -> f64 {
    match (check_in, check_out) {
        (Some(start), Some(end)) => (end - start).num_seconds() as f64 / 3600.0,
        _ => 0.0,
    }
}

/// Inclusive day count of a date range: `(end − start) + 1`.
///
/// Returns `0` if either date is absent.
#[must_use]
pub fn leave_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_days() + 1,
        _ => 0,
    }
}

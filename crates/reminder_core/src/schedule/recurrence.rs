//! Recurrence advance for acknowledged recurring reminders.
//!
//! # Invariants
//! - Time-of-day is preserved for every frequency.
//! - Monthly advance rolls overflowing days into the following month
//!   (Jan 31 + 1 month = Mar 3, or Mar 2 in leap years).
//! - `RecurringFrequency::None` and arithmetic overflow return the input.

use crate::model::reminder::RecurringFrequency;
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};

/// Returns the next due date for one acknowledgment of `frequency`.
pub fn advance(due_date: DateTime<Utc>, frequency: RecurringFrequency) -> DateTime<Utc> {
    let next = match frequency {
        RecurringFrequency::Daily => add_days(due_date, 1),
        RecurringFrequency::Weekly => add_days(due_date, 7),
        RecurringFrequency::Monthly => add_months_rolling(due_date, 1),
        RecurringFrequency::None => return due_date,
    };
    next.unwrap_or(due_date)
}

/// Adds whole calendar days, keeping the time-of-day.
///
/// Negative values move the date backwards.
pub fn add_days(at: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|delta| at.checked_add_signed(delta))
}

fn add_months_rolling(at: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    let date = at.date_naive();
    let month_index = date
        .year()
        .checked_mul(12)?
        .checked_add(i32::try_from(date.month0()).ok()?)?
        .checked_add(i32::try_from(months).ok()?)?;
    let target_month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;
    let first_of_month = NaiveDate::from_ymd_opt(month_index.div_euclid(12), target_month, 1)?;
    let rolled = first_of_month.checked_add_days(Days::new(u64::from(date.day() - 1)))?;
    Some(rolled.and_time(at.time()).and_utc())
}

#[cfg(test)]
mod tests {
    use super::{add_days, advance};
    use crate::model::reminder::RecurringFrequency;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn daily_adds_one_day_at_same_time() {
        for start in [
            at(2026, 1, 1, 9, 0),
            at(2026, 2, 28, 23, 59),
            at(2024, 2, 28, 0, 0),
            at(2026, 12, 31, 18, 45),
        ] {
            let next = advance(start, RecurringFrequency::Daily);
            assert_eq!(next, start + Duration::days(1));
            assert_eq!(next.time(), start.time());
        }
    }

    #[test]
    fn weekly_adds_seven_days() {
        let start = at(2026, 10, 30, 7, 15);
        assert_eq!(
            advance(start, RecurringFrequency::Weekly),
            at(2026, 11, 6, 7, 15)
        );
    }

    #[test]
    fn monthly_keeps_day_of_month_when_it_exists() {
        assert_eq!(
            advance(at(2026, 4, 15, 10, 0), RecurringFrequency::Monthly),
            at(2026, 5, 15, 10, 0)
        );
        assert_eq!(
            advance(at(2026, 12, 5, 10, 0), RecurringFrequency::Monthly),
            at(2027, 1, 5, 10, 0)
        );
    }

    #[test]
    fn monthly_rolls_overflowing_days_forward() {
        assert_eq!(
            advance(at(2025, 1, 31, 9, 0), RecurringFrequency::Monthly),
            at(2025, 3, 3, 9, 0)
        );
        assert_eq!(
            advance(at(2024, 1, 31, 9, 0), RecurringFrequency::Monthly),
            at(2024, 3, 2, 9, 0)
        );
        assert_eq!(
            advance(at(2026, 3, 31, 9, 0), RecurringFrequency::Monthly),
            at(2026, 5, 1, 9, 0)
        );
    }

    #[test]
    fn none_returns_input_unchanged() {
        let start = at(2026, 6, 1, 12, 0);
        assert_eq!(advance(start, RecurringFrequency::None), start);
    }

    #[test]
    fn overflow_returns_input_unchanged() {
        let start = DateTime::<Utc>::MAX_UTC;
        assert_eq!(advance(start, RecurringFrequency::Daily), start);
        assert_eq!(add_days(start, 1), None);
    }
}

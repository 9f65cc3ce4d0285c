//! Due-status classification relative to a supplied "now".
//!
//! # Invariants
//! - Overdue is decided on the exact millisecond difference, so a reminder
//!   a few minutes late is overdue even though it rounds to zero hours.
//! - Hour counts use half-up rounding; day counts round the hour count / 24.
//! - Results are never cached on the reminder.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{Display, Formatter};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const HOURS_PER_DAY: i64 = 24;

/// Urgency classification of a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DueTone {
    Overdue,
    Soon,
    Scheduled,
}

impl DueTone {
    /// Stable string id used by presentation styling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Soon => "soon",
            Self::Scheduled => "scheduled",
        }
    }
}

/// Human-facing magnitude of a due status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DueLabel {
    OverdueDays(i64),
    OverdueHours(i64),
    /// Due within the next hour.
    DueNow,
    HoursLeft(i64),
    DaysLeft(i64),
}

impl Display for DueLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OverdueDays(days) => write!(f, "Trễ {days} ngày"),
            Self::OverdueHours(hours) => write!(f, "Trễ {hours} giờ"),
            Self::DueNow => write!(f, "Sắp đến hạn"),
            Self::HoursLeft(hours) => write!(f, "Còn {hours} giờ"),
            Self::DaysLeft(days) => write!(f, "Còn {days} ngày"),
        }
    }
}

/// Classification result: tone plus label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DueStatus {
    pub tone: DueTone,
    pub label: DueLabel,
}

/// Classifies `due_date` against `now`.
pub fn classify(due_date: DateTime<Utc>, now: DateTime<Utc>) -> DueStatus {
    let diff_ms = due_date.signed_duration_since(now).num_milliseconds();
    let diff_hours = round_half_up(diff_ms as f64 / MILLIS_PER_HOUR);
    let abs_hours = diff_hours.abs();

    if diff_ms < 0 {
        let label = if abs_hours >= HOURS_PER_DAY {
            DueLabel::OverdueDays(round_days(abs_hours))
        } else {
            DueLabel::OverdueHours(abs_hours)
        };
        return DueStatus {
            tone: DueTone::Overdue,
            label,
        };
    }

    if diff_hours <= HOURS_PER_DAY {
        let label = if diff_hours <= 1 {
            DueLabel::DueNow
        } else {
            DueLabel::HoursLeft(diff_hours)
        };
        return DueStatus {
            tone: DueTone::Soon,
            label,
        };
    }

    DueStatus {
        tone: DueTone::Scheduled,
        label: DueLabel::DaysLeft(round_days(diff_hours)),
    }
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn round_days(hours: i64) -> i64 {
    round_half_up(hours as f64 / HOURS_PER_DAY as f64)
}

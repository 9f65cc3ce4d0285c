//! Dashboard aggregates over the full reminder collection.

use crate::model::reminder::Reminder;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReminderStats {
    pub total: usize,
    /// Non-recurring reminders marked completed.
    pub completed: usize,
    /// Reminders due before `now`, including completed ones.
    pub overdue: usize,
    pub recurring: usize,
}

/// Computes counters over every reminder, ignoring list filters.
pub fn statistics(reminders: &[Reminder], now: DateTime<Utc>) -> ReminderStats {
    reminders
        .iter()
        .fold(ReminderStats::default(), |mut stats, reminder| {
            stats.total += 1;
            if reminder.is_done() {
                stats.completed += 1;
            }
            if reminder.due_date < now {
                stats.overdue += 1;
            }
            if reminder.is_recurring {
                stats.recurring += 1;
            }
            stats
        })
}

/// Returns the not-completed reminder with the earliest due date.
///
/// Ties resolve to the reminder that comes first in collection order.
pub fn next_reminder(reminders: &[Reminder]) -> Option<&Reminder> {
    reminders
        .iter()
        .filter(|reminder| !reminder.completed)
        .min_by_key(|reminder| reminder.due_date)
}

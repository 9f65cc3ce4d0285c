//! Reminder store with functional create/complete/snooze updates.
//!
//! # Invariants
//! - New reminders are prepended (most recent first).
//! - Unknown ids leave the collection unchanged.
//! - Recurring acknowledgment advances `due_date` and never sets `completed`.

use crate::model::reminder::{Reminder, ReminderDraft, ReminderId, ReminderValidationError};
use crate::schedule::recurrence::{add_days, advance};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Snooze interval used when the caller does not pick one.
pub const DEFAULT_SNOOZE_DAYS: i64 = 1;

/// Immutable ordered reminder collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
}

impl ReminderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing reminders, keeping their order.
    pub fn from_reminders(reminders: Vec<Reminder>) -> Self {
        Self { reminders }
    }

    /// Reminders in store order.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Looks up one reminder by id.
    pub fn get(&self, id: ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|reminder| reminder.id == id)
    }

    /// Validates `draft` and returns a store with the new reminder prepended.
    ///
    /// # Errors
    /// - Any `ReminderValidationError` from draft validation; the receiver is
    ///   left untouched in that case.
    pub fn create(
        &self,
        draft: ReminderDraft,
        now: DateTime<Utc>,
    ) -> Result<(Self, Reminder), ReminderValidationError> {
        let reminder = draft.into_reminder(Uuid::new_v4(), now)?;

        let mut reminders = Vec::with_capacity(self.reminders.len() + 1);
        reminders.push(reminder.clone());
        reminders.extend(self.reminders.iter().cloned());

        Ok((Self { reminders }, reminder))
    }

    /// Acknowledges one reminder.
    ///
    /// - Recurring: advance `due_date` by frequency, set `last_completed_at`.
    /// - Otherwise: flip `completed`, stamping or clearing `completed_at`.
    pub fn toggle_complete(&self, id: ReminderId, now: DateTime<Utc>) -> Self {
        self.map_one(id, |reminder| {
            if reminder.is_recurring {
                reminder.due_date = advance(reminder.due_date, reminder.recurring_frequency);
                reminder.last_completed_at = Some(now);
                return;
            }

            reminder.completed = !reminder.completed;
            reminder.completed_at = reminder.completed.then_some(now);
        })
    }

    /// Moves one reminder's due date by `days` calendar days.
    ///
    /// Applies regardless of recurrence or completion state.
    pub fn snooze(&self, id: ReminderId, days: i64) -> Self {
        self.map_one(id, |reminder| {
            if let Some(due_date) = add_days(reminder.due_date, days) {
                reminder.due_date = due_date;
            }
        })
    }

    fn map_one(&self, id: ReminderId, update: impl FnOnce(&mut Reminder)) -> Self {
        let mut reminders = self.reminders.clone();
        if let Some(target) = reminders.iter_mut().find(|reminder| reminder.id == id) {
            update(target);
        }
        Self { reminders }
    }
}

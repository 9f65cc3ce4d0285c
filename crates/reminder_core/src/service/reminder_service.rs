//! Reminder use-case service.
//!
//! # Responsibility
//! - Own the current store value and swap it on every mutation.
//! - Read "now" from the injected clock once per call.
//! - Emit metadata-only diagnostic events for mutations.
//!
//! # Invariants
//! - A rejected create leaves the store untouched.
//! - Unknown ids are no-ops, not errors.
//! - Reminder titles and descriptions are never logged.

use crate::clock::{Clock, SystemClock};
use crate::model::reminder::{
    Reminder, ReminderDraft, ReminderId, ReminderValidationError, Timestamp,
};
use crate::seed::demo_reminders;
use crate::store::reminder_store::ReminderStore;
use crate::view::filter::{filter_reminders, ReminderFilter};
use crate::view::stats::{next_reminder, statistics, ReminderStats};
use log::{debug, info, warn};

/// Stateful facade over the functional reminder store.
pub struct ReminderService<C: Clock = SystemClock> {
    store: ReminderStore,
    clock: C,
}

impl ReminderService<SystemClock> {
    /// Creates an empty service on wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ReminderService<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ReminderService<C> {
    /// Creates an empty service using the provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self::with_store(ReminderStore::new(), clock)
    }

    /// Creates a service around an existing store value.
    pub fn with_store(store: ReminderStore, clock: C) -> Self {
        Self { store, clock }
    }

    /// Creates a service pre-populated with the demo reminders.
    pub fn with_demo_data(clock: C) -> Self {
        let store = ReminderStore::from_reminders(demo_reminders(clock.now()));
        info!(
            "event=store_seed module=service status=ok count={}",
            store.len()
        );
        Self::with_store(store, clock)
    }

    /// Current store value.
    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    /// Current time as seen by this service.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Validates `draft` and prepends the new reminder.
    ///
    /// # Errors
    /// - `ReminderValidationError` when the draft is rejected; no mutation.
    pub fn create_reminder(
        &mut self,
        draft: ReminderDraft,
    ) -> Result<Reminder, ReminderValidationError> {
        match self.store.create(draft, self.clock.now()) {
            Ok((store, reminder)) => {
                self.store = store;
                info!(
                    "event=reminder_create module=service status=ok id={} recurring={} frequency={}",
                    reminder.id,
                    reminder.is_recurring,
                    reminder.recurring_frequency.as_str()
                );
                Ok(reminder)
            }
            Err(err) => {
                warn!(
                    "event=reminder_create module=service status=rejected error={}",
                    err
                );
                Err(err)
            }
        }
    }

    /// Acknowledges one reminder; no-op when `id` is unknown.
    pub fn toggle_complete(&mut self, id: ReminderId) {
        if self.store.get(id).is_none() {
            debug!("event=reminder_toggle module=service status=skipped reason=unknown_id id={id}");
            return;
        }
        self.store = self.store.toggle_complete(id, self.clock.now());
        if let Some(reminder) = self.store.get(id) {
            info!(
                "event=reminder_toggle module=service status=ok id={} recurring={} completed={}",
                id, reminder.is_recurring, reminder.completed
            );
        }
    }

    /// Pushes one reminder's due date by `days`; no-op when `id` is unknown.
    pub fn snooze(&mut self, id: ReminderId, days: i64) {
        if self.store.get(id).is_none() {
            debug!("event=reminder_snooze module=service status=skipped reason=unknown_id id={id}");
            return;
        }
        self.store = self.store.snooze(id, days);
        info!("event=reminder_snooze module=service status=ok id={id} days={days}");
    }

    /// Filtered and sorted list for display.
    pub fn filtered_view(&self, filter: &ReminderFilter) -> Vec<Reminder> {
        filter_reminders(self.store.reminders(), filter)
    }

    /// Dashboard counters over the whole collection.
    pub fn statistics(&self) -> ReminderStats {
        statistics(self.store.reminders(), self.clock.now())
    }

    /// Earliest-due reminder that is not completed.
    pub fn next_reminder(&self) -> Option<Reminder> {
        next_reminder(self.store.reminders()).cloned()
    }
}

//! Core domain logic for the reminder tracker.
//! This crate is the single source of truth for reminder invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod schedule;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::reminder::{
    parse_due_date, Category, ParseValueError, Priority, RecurringFrequency, Reminder,
    ReminderDraft, ReminderId, ReminderValidationError, Timestamp,
};
pub use schedule::due_status::{classify, DueLabel, DueStatus, DueTone};
pub use schedule::recurrence::advance;
pub use seed::demo_reminders;
pub use service::reminder_service::ReminderService;
pub use store::reminder_store::{ReminderStore, DEFAULT_SNOOZE_DAYS};
pub use view::filter::{
    filter_reminders, parse_category_filter, parse_priority_filter, sort_reminders,
    ReminderFilter, SortKey, StatusFilter,
};
pub use view::stats::{next_reminder, statistics, ReminderStats};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

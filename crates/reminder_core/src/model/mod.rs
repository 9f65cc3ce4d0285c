//! Reminder domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Parse boundary string values into typed enums.
//!
//! # Invariants
//! - Every reminder is identified by a stable `ReminderId`.
//! - `is_recurring == false` iff `recurring_frequency == RecurringFrequency::None`.

pub mod reminder;

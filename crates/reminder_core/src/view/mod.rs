//! Derived reminder views.
//!
//! # Responsibility
//! - Filter and sort reminders for list display.
//! - Aggregate dashboard statistics and pick the next reminder.
//!
//! # Invariants
//! - Views are recomputed from the full collection on every read.
//! - Statistics ignore the active filter.

pub mod filter;
pub mod stats;

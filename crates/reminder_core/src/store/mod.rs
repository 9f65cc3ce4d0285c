//! In-memory reminder collection.
//!
//! # Responsibility
//! - Own the ordered reminder collection.
//! - Apply create/complete/snooze as functional updates.
//!
//! # Invariants
//! - Mutations never touch the receiver; they return a new store value.
//! - Reminders are mutated only through the three store entry points.

pub mod reminder_store;

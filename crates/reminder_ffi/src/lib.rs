//! Flutter-facing bridge over `reminder_core`.

pub mod api;

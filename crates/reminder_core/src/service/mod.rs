//! Core use-case services.
//!
//! # Responsibility
//! - Expose the entry points the presentation layer calls.
//! - Keep UI/FFI layers decoupled from store and clock details.

pub mod reminder_service;

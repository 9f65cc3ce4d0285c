//! Pure date computations over reminder due dates.
//!
//! # Responsibility
//! - Advance recurring due dates by their frequency.
//! - Classify a due date against a caller-supplied "now".
//!
//! # Invariants
//! - Functions here never read the ambient clock.
//! - Same inputs always produce the same outputs.

pub mod due_status;
pub mod recurrence;

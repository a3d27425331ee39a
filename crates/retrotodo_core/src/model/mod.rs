//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define canonical item, date and draft structures used by the store.
//! - Keep validation next to the data it protects.
//!
//! # Invariants
//! - Every item is identified by a stable, collision-resistant `TodoId`.
//! - A committed item always carries a non-empty trimmed title.
//! - Dates are calendar days without time-of-day or timezone.

pub mod date;
pub mod draft;
pub mod todo;

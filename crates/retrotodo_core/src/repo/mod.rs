//! Collection storage abstractions.
//!
//! # Responsibility
//! - Define the ordered collection contract the store writes through.
//! - Keep ordering and uniqueness rules out of the controller.
//!
//! # Invariants
//! - Storage is in-memory only; contents end with the process.

pub mod todo_repo;

//! State controller for the to-do screen.
//!
//! # Responsibility
//! - Own the item collection and the draft behind one explicit object.
//! - Expose the only mutation paths available to rendering layers.
//!
//! # See also
//! - `crate::view` for read-only snapshots handed to renderers.

pub mod todo_list_store;

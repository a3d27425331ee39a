//! Device capability contracts consumed by the to-do screen.
//!
//! # Responsibility
//! - Name the permission-gated device capabilities (camera, photo library).
//! - Express capability calls as suspending two-outcome results.
//! - Describe date-picker events applied to the draft.
//!
//! # Invariants
//! - Permission is checked before every capture/pick launch.
//! - Denial and cancellation never mutate the draft.

pub mod date_picker;
pub mod device;
pub mod photo;

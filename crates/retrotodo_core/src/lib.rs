//! Core domain logic for Retro Todo.
//! This crate is the single source of truth for list and draft invariants.

pub mod capability;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;
pub mod view;

pub use capability::date_picker::DatePickerEvent;
pub use capability::device::{parse_device_capability, CapabilityParseError, DeviceCapability};
pub use capability::photo::{
    acquire_photo, attach_photo, CapabilityError, CaptureOptions, CaptureOptionsError,
    CaptureOutcome, PermissionNotifier, PermissionStatus, PhotoProvider,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::date::{format_date, TodoDate, TodoDateError};
pub use model::draft::{Draft, DraftMode};
pub use model::todo::{PhotoRef, PhotoRefError, TodoId, TodoItem, TodoValidationError};
pub use repo::todo_repo::{InMemoryTodoRepository, RepoError, RepoResult, TodoRepository};
pub use store::todo_list_store::{CommitError, CommitOutcome, TodoListStore};
pub use view::{DraftView, TodoListView, TodoRow};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

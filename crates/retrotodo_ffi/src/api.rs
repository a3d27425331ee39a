//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one opaque `TodoSession` per screen; Dart owns the handle.
//! - Translate string ids and calendar fields at the boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Unparsable ids behave like missing ids (no-op).
//! - Device permission/capture calls run in Dart; only their results
//!   cross into Rust.

use log::warn;
use retrotodo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_device_capability, ping as ping_inner, CaptureOptions, CommitError, CommitOutcome,
    DatePickerEvent, DraftMode, PhotoRef, TodoDate, TodoId, TodoListStore,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

const GENERIC_PERMISSION_NOTICE: &str = "Permission is required.";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListItem {
    /// Stable item id in string form.
    pub todo_id: String,
    /// 1-based display position.
    pub position: u32,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub photo_uri: Option<String>,
}

/// List snapshot, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub items: Vec<TodoListItem>,
    /// Placeholder text when `items` is empty.
    pub empty_message: Option<String>,
}

/// Input-area snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraftSnapshot {
    pub text: String,
    pub date_label: String,
    pub photo_uri: Option<String>,
    /// Id of the item being edited; `None` in compose mode.
    pub editing_id: Option<String>,
    pub commit_label: String,
    pub date_picker_open: bool,
}

/// Options Dart forwards to the platform image picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodoCaptureOptions {
    pub allows_editing: bool,
    pub quality: f32,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected item id.
    pub todo_id: Option<String>,
    /// `true` when an existing item was overwritten.
    pub updated: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, outcome: CommitOutcome) -> Self {
        Self {
            ok: true,
            todo_id: Some(outcome.id().to_string()),
            updated: matches!(outcome, CommitOutcome::Updated(_)),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            todo_id: None,
            updated: false,
            message: message.into(),
        }
    }
}

/// Screen-scoped state handle owning one `TodoListStore`.
#[flutter_rust_bridge::frb(opaque)]
pub struct TodoSession {
    store: Mutex<TodoListStore>,
    capture: CaptureOptions,
}

impl TodoSession {
    /// Creates an empty session dated today.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            store: Mutex::new(TodoListStore::new()),
            capture: CaptureOptions::default(),
        }
    }

    /// Capture options for camera/gallery launches.
    #[flutter_rust_bridge::frb(sync)]
    pub fn capture_options(&self) -> TodoCaptureOptions {
        TodoCaptureOptions {
            allows_editing: self.capture.allows_editing,
            quality: self.capture.quality,
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn set_text(&self, text: String) {
        self.store().set_text(text);
    }

    /// Sets the draft date. Returns empty string on success.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_date(&self, year: i32, month: u32, day: u32) -> String {
        match TodoDate::from_ymd(year, month, day) {
            Ok(date) => {
                self.store().set_date(date);
                String::new()
            }
            Err(err) => err.to_string(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn open_date_picker(&self) {
        self.store().open_date_picker();
    }

    /// Applies a picker selection. Returns empty string on success.
    ///
    /// An invalid date closes the picker without changing the draft.
    #[flutter_rust_bridge::frb(sync)]
    pub fn date_picker_selected(&self, year: i32, month: u32, day: u32) -> String {
        let mut store = self.store();
        match TodoDate::from_ymd(year, month, day) {
            Ok(date) => {
                store.apply_date_picker(DatePickerEvent::Selected(date));
                String::new()
            }
            Err(err) => {
                store.apply_date_picker(DatePickerEvent::Dismissed);
                err.to_string()
            }
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn date_picker_dismissed(&self) {
        self.store().apply_date_picker(DatePickerEvent::Dismissed);
    }

    /// Applies a camera/gallery result. Returns whether the draft photo changed.
    ///
    /// Cancelled results and blank URIs leave the draft untouched.
    #[flutter_rust_bridge::frb(sync)]
    pub fn apply_photo_result(&self, cancelled: bool, uri: Option<String>) -> bool {
        if cancelled {
            return false;
        }
        match uri.map(PhotoRef::new) {
            Some(Ok(photo)) => {
                self.store().set_photo(photo);
                true
            }
            Some(Err(_)) | None => false,
        }
    }

    /// Returns the blocking notice to show for a denied capability.
    #[flutter_rust_bridge::frb(sync)]
    pub fn permission_denied(&self, capability: String) -> String {
        match parse_device_capability(capability.as_str()) {
            Ok(capability) => {
                warn!(
                    "event=permission_denied module=ffi status=denied capability={}",
                    capability
                );
                capability.permission_notice().to_string()
            }
            Err(_) => GENERIC_PERMISSION_NOTICE.to_string(),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn clear_photo(&self) {
        self.store().clear_photo();
    }

    /// Commits the draft (create or update).
    ///
    /// # FFI contract
    /// - Blank text returns `ok=false`; the UI ignores it silently.
    #[flutter_rust_bridge::frb(sync)]
    pub fn commit(&self) -> TodoActionResponse {
        match self.store().add_or_update() {
            Ok(outcome @ CommitOutcome::Created(_)) => {
                TodoActionResponse::success("Todo added.", outcome)
            }
            Ok(outcome @ CommitOutcome::Updated(_)) => {
                TodoActionResponse::success("Todo updated.", outcome)
            }
            Err(CommitError::EmptyTitle) => TodoActionResponse::failure("Nothing to add."),
            Err(err) => TodoActionResponse::failure(format!("commit failed: {err}")),
        }
    }

    /// Removes an item. Returns whether anything was removed.
    #[flutter_rust_bridge::frb(sync)]
    pub fn remove(&self, todo_id: String) -> bool {
        match parse_todo_id(todo_id.as_str()) {
            Some(id) => self.store().remove(id),
            None => false,
        }
    }

    /// Loads an item into the draft. Returns whether edit mode was entered.
    #[flutter_rust_bridge::frb(sync)]
    pub fn begin_edit(&self, todo_id: String) -> bool {
        match parse_todo_id(todo_id.as_str()) {
            Some(id) => self.store().begin_edit(id).is_some(),
            None => false,
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn cancel_edit(&self) {
        self.store().cancel_edit();
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn list(&self) -> TodoListResponse {
        let view = self.store().view();
        TodoListResponse {
            items: view
                .rows
                .into_iter()
                .map(|row| TodoListItem {
                    todo_id: row.id.to_string(),
                    position: u32::try_from(row.position).unwrap_or(u32::MAX),
                    title: row.title,
                    date: row.date,
                    photo_uri: row.photo,
                })
                .collect(),
            empty_message: view.empty_message.map(str::to_string),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn draft(&self) -> TodoDraftSnapshot {
        let view = self.store().draft_view();
        TodoDraftSnapshot {
            text: view.text,
            date_label: view.date_label,
            photo_uri: view.photo,
            editing_id: match view.mode {
                DraftMode::Compose => None,
                DraftMode::Edit(id) => Some(id.to_string()),
            },
            commit_label: view.commit_label.to_string(),
            date_picker_open: view.date_picker_open,
        }
    }

    fn store(&self) -> MutexGuard<'_, TodoListStore> {
        // Store mutations cannot leave partial state, so a poisoned lock is safe to reuse.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TodoSession {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_todo_id(value: &str) -> Option<TodoId> {
    Uuid::parse_str(value.trim()).ok()
}

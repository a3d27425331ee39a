//! Read-only render snapshots.
//!
//! Renderers consume these values and call back into `TodoListStore`;
//! they never hold mutable access to the collection or draft.

use crate::model::date::format_date;
use crate::model::draft::{Draft, DraftMode};
use crate::model::todo::{TodoId, TodoItem};

/// Placeholder shown when the list has no items.
pub const EMPTY_LIST_MESSAGE: &str = "Nothing to do yet...";
/// Commit button label in compose mode.
pub const COMMIT_LABEL_ADD: &str = "Add";
/// Commit button label in edit mode.
pub const COMMIT_LABEL_SAVE: &str = "Save";

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    /// 1-based display position.
    pub position: usize,
    pub id: TodoId,
    pub title: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub photo: Option<String>,
}

/// Rendered list, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    pub rows: Vec<TodoRow>,
    /// Set only when `rows` is empty.
    pub empty_message: Option<&'static str>,
}

impl TodoListView {
    pub fn from_items(items: &[TodoItem]) -> Self {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| TodoRow {
                position: index + 1,
                id: item.id,
                title: item.title.clone(),
                date: format_date(item.date),
                photo: item.photo.as_ref().map(|photo| photo.as_str().to_string()),
            })
            .collect::<Vec<_>>();
        let empty_message = rows.is_empty().then_some(EMPTY_LIST_MESSAGE);
        Self {
            rows,
            empty_message,
        }
    }
}

/// Rendered input area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    pub text: String,
    /// `YYYY-MM-DD` label for the date button.
    pub date_label: String,
    /// Preview image URI.
    pub photo: Option<String>,
    pub mode: DraftMode,
    pub commit_label: &'static str,
    pub date_picker_open: bool,
}

impl DraftView {
    pub fn from_draft(draft: &Draft) -> Self {
        let mode = draft.mode();
        Self {
            text: draft.text().to_string(),
            date_label: format_date(draft.date()),
            photo: draft.photo().map(|photo| photo.as_str().to_string()),
            mode,
            commit_label: match mode {
                DraftMode::Compose => COMMIT_LABEL_ADD,
                DraftMode::Edit(_) => COMMIT_LABEL_SAVE,
            },
            date_picker_open: draft.is_date_picker_open(),
        }
    }
}

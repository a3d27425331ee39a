//! Transient composition state for the next commit.
//!
//! # Invariants
//! - Mode is derived solely from `edit_target`: `None` is compose mode.
//! - Mutation happens only through `TodoListStore`; render layers read.

use crate::model::date::TodoDate;
use crate::model::todo::{PhotoRef, TodoId, TodoItem};

/// Commit mode selected by the draft's edit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// Commit creates a new item.
    Compose,
    /// Commit overwrites the item with this id.
    Edit(TodoId),
}

/// Uncommitted item-in-progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
    date: TodoDate,
    photo: Option<PhotoRef>,
    edit_target: Option<TodoId>,
    date_picker_open: bool,
}

impl Draft {
    /// Empty compose-mode draft dated `date`.
    pub fn new(date: TodoDate) -> Self {
        Self {
            text: String::new(),
            date,
            photo: None,
            edit_target: None,
            date_picker_open: false,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Text as it would be committed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    pub fn date(&self) -> TodoDate {
        self.date
    }

    pub fn photo(&self) -> Option<&PhotoRef> {
        self.photo.as_ref()
    }

    pub fn edit_target(&self) -> Option<TodoId> {
        self.edit_target
    }

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker_open
    }

    pub fn mode(&self) -> DraftMode {
        match self.edit_target {
            Some(id) => DraftMode::Edit(id),
            None => DraftMode::Compose,
        }
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_date(&mut self, date: TodoDate) {
        self.date = date;
    }

    pub(crate) fn set_photo(&mut self, photo: Option<PhotoRef>) {
        self.photo = photo;
    }

    pub(crate) fn set_date_picker_open(&mut self, open: bool) {
        self.date_picker_open = open;
    }

    /// Copies an item's fields into the draft and targets it for edit.
    pub(crate) fn load(&mut self, item: &TodoItem) {
        self.text = item.title.clone();
        self.date = item.date;
        self.photo = item.photo.clone();
        self.edit_target = Some(item.id);
    }

    /// Back to compose mode with empty text and no photo.
    ///
    /// The selected date is kept for the next entry.
    pub(crate) fn reset(&mut self) {
        self.text.clear();
        self.photo = None;
        self.edit_target = None;
    }
}

//! To-do list store: collection plus draft.
//!
//! # Responsibility
//! - Turn draft commits into create (prepend) or in-place update.
//! - Route deletion and edit-loading by item id.
//! - Keep draft inputs (text, date, photo, picker visibility) in one place.
//!
//! # Invariants
//! - Blank drafts never reach the collection.
//! - Compose-mode commits prepend; edit-mode commits keep id and position.
//! - Every successful commit resets text, photo and edit target.
//! - Missing ids on remove/edit are no-ops, never errors.

use crate::capability::date_picker::DatePickerEvent;
use crate::model::date::TodoDate;
use crate::model::draft::{Draft, DraftMode};
use crate::model::todo::{PhotoRef, TodoId, TodoItem};
use crate::repo::todo_repo::{InMemoryTodoRepository, RepoError, TodoRepository};
use crate::view::{DraftView, TodoListView};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new item was prepended.
    Created(TodoId),
    /// An existing item was overwritten in place.
    Updated(TodoId),
}

impl CommitOutcome {
    pub fn id(self) -> TodoId {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }
}

/// Commit rejection. The draft is unchanged whenever this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    /// Draft text is empty after trimming.
    EmptyTitle,
    /// Collection refused the write.
    Repo(RepoError),
}

impl Display for CommitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "cannot commit an empty title"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for CommitError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Single owner of the to-do collection and the draft.
#[derive(Debug, Clone)]
pub struct TodoListStore<R: TodoRepository = InMemoryTodoRepository> {
    repo: R,
    draft: Draft,
}

impl TodoListStore<InMemoryTodoRepository> {
    /// Empty store whose draft is dated today (local calendar).
    pub fn new() -> Self {
        Self::with_date(TodoDate::today())
    }

    /// Empty store whose draft starts at `date`.
    pub fn with_date(date: TodoDate) -> Self {
        Self::with_repository(InMemoryTodoRepository::new(), date)
    }
}

impl Default for TodoListStore<InMemoryTodoRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TodoRepository> TodoListStore<R> {
    /// Store over a caller-provided repository.
    pub fn with_repository(repo: R, date: TodoDate) -> Self {
        Self {
            repo,
            draft: Draft::new(date),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> DraftMode {
        self.draft.mode()
    }

    /// Items, most recent first.
    pub fn items(&self) -> &[TodoItem] {
        self.repo.list()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.set_text(text.into());
    }

    pub fn set_date(&mut self, date: TodoDate) {
        self.draft.set_date(date);
    }

    pub fn open_date_picker(&mut self) {
        self.draft.set_date_picker_open(true);
    }

    /// Closes the picker and applies a selection, if any.
    ///
    /// Returns whether the draft date changed.
    pub fn apply_date_picker(&mut self, event: DatePickerEvent) -> bool {
        self.draft.set_date_picker_open(false);
        match event.selected() {
            Some(date) => {
                self.draft.set_date(date);
                true
            }
            None => false,
        }
    }

    /// Overwrites the draft photo; the latest call wins.
    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.draft.set_photo(Some(photo));
    }

    pub fn clear_photo(&mut self) {
        self.draft.set_photo(None);
    }

    /// Commits the draft as a new item or an in-place update.
    ///
    /// An edit target that no longer exists falls back to creating a new
    /// item.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed draft text is empty; the draft is kept.
    pub fn add_or_update(&mut self) -> Result<CommitOutcome, CommitError> {
        let title = self.draft.trimmed_text();
        if title.is_empty() {
            debug!("event=todo_commit module=store status=rejected reason=empty_title");
            return Err(CommitError::EmptyTitle);
        }

        let date = self.draft.date();
        let photo = self.draft.photo().cloned();

        let outcome = match self.draft.edit_target() {
            Some(id) if self.repo.get(id).is_some() => {
                let item = TodoItem::with_id(id, title, date, photo)
                    .map_err(RepoError::from)?;
                self.repo.replace(item)?;
                CommitOutcome::Updated(id)
            }
            stale => {
                if let Some(id) = stale {
                    debug!(
                        "event=todo_commit module=store status=fallback reason=edit_target_missing id={}",
                        id
                    );
                }
                let item = TodoItem::new(title, date, photo).map_err(RepoError::from)?;
                CommitOutcome::Created(self.repo.prepend(item)?)
            }
        };

        self.draft.reset();
        info!(
            "event=todo_commit module=store status=ok mode={} id={} count={}",
            match outcome {
                CommitOutcome::Created(_) => "create",
                CommitOutcome::Updated(_) => "update",
            },
            outcome.id(),
            self.repo.len()
        );
        Ok(outcome)
    }

    /// Removes the item with `id`. Missing ids are a no-op.
    ///
    /// Returns whether an item was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let removed = self.repo.remove(id);
        debug!(
            "event=todo_remove module=store status={} id={} count={}",
            if removed { "ok" } else { "noop" },
            id,
            self.repo.len()
        );
        removed
    }

    /// Loads an existing item into the draft and enters edit mode.
    ///
    /// Returns `None` and leaves the draft unchanged when `id` is unknown.
    pub fn begin_edit(&mut self, id: TodoId) -> Option<&Draft> {
        let Some(item) = self.repo.get(id) else {
            debug!("event=todo_begin_edit module=store status=noop id={}", id);
            return None;
        };
        self.draft.load(item);
        debug!("event=todo_begin_edit module=store status=ok id={}", id);
        Some(&self.draft)
    }

    /// Drops the edit target, text and photo; returns to compose mode.
    pub fn cancel_edit(&mut self) {
        self.draft.reset();
    }

    /// Read-only list snapshot for renderers.
    pub fn view(&self) -> TodoListView {
        TodoListView::from_items(self.repo.list())
    }

    /// Read-only draft snapshot for renderers.
    pub fn draft_view(&self) -> DraftView {
        DraftView::from_draft(&self.draft)
    }
}

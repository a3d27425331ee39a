//! Ordered to-do collection contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the most-recent-first ordering of items.
//! - Enforce id uniqueness and item validation on every write.
//!
//! # Invariants
//! - Write paths call `TodoItem::validate()` before mutating.
//! - No two items share an id.
//! - `replace` never moves an item.

use crate::model::todo::{TodoId, TodoItem, TodoValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for collection writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(TodoValidationError),
    DuplicateId(TodoId),
    NotFound(TodoId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "todo id already present: {id}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<TodoValidationError> for RepoError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for the ordered item collection.
pub trait TodoRepository {
    /// Inserts `item` at the front of the collection.
    fn prepend(&mut self, item: TodoItem) -> RepoResult<TodoId>;
    /// Overwrites the item sharing `item.id`, keeping its position.
    fn replace(&mut self, item: TodoItem) -> RepoResult<()>;
    /// Removes the item with `id`. Returns whether anything was removed.
    fn remove(&mut self, id: TodoId) -> bool;
    fn get(&self, id: TodoId) -> Option<&TodoItem>;
    /// All items, most recent first.
    fn list(&self) -> &[TodoItem];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// `Vec`-backed repository living for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Vec<TodoItem>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn prepend(&mut self, item: TodoItem) -> RepoResult<TodoId> {
        item.validate()?;
        if self.position(item.id).is_some() {
            return Err(RepoError::DuplicateId(item.id));
        }

        let id = item.id;
        self.items.insert(0, item);
        Ok(id)
    }

    fn replace(&mut self, item: TodoItem) -> RepoResult<()> {
        item.validate()?;
        let index = self.position(item.id).ok_or(RepoError::NotFound(item.id))?;
        self.items[index] = item;
        Ok(())
    }

    fn remove(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn list(&self) -> &[TodoItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTodoRepository, RepoError, TodoRepository};
    use crate::model::date::TodoDate;
    use crate::model::todo::{TodoItem, TodoValidationError};

    fn item(title: &str) -> TodoItem {
        let date = TodoDate::from_ymd(2024, 5, 1).expect("valid date");
        TodoItem::new(title, date, None).expect("valid item")
    }

    #[test]
    fn prepend_rejects_duplicate_id() {
        let mut repo = InMemoryTodoRepository::new();
        let first = item("first");
        repo.prepend(first.clone()).expect("first insert");

        let err = repo.prepend(first.clone()).expect_err("duplicate must fail");
        assert_eq!(err, RepoError::DuplicateId(first.id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn replace_missing_returns_not_found() {
        let mut repo = InMemoryTodoRepository::new();
        let ghost = item("ghost");

        let err = repo.replace(ghost.clone()).expect_err("missing id must fail");
        assert_eq!(err, RepoError::NotFound(ghost.id));
    }

    #[test]
    fn writes_validate_items() {
        let mut repo = InMemoryTodoRepository::new();
        let mut blank = item("blank");
        blank.title = "  ".to_string();

        let err = repo.prepend(blank).expect_err("empty title must fail");
        assert_eq!(err, RepoError::Validation(TodoValidationError::EmptyTitle));
        assert!(repo.is_empty());
    }
}

//! To-do item model.
//!
//! # Responsibility
//! - Define the canonical item record rendered by the list.
//! - Validate items on construction and on deserialization.
//!
//! # Invariants
//! - `id` is a random v4 UUID, never nil and never reused.
//! - `title` is trimmed and non-empty.
//! - `photo`, when present, is a non-empty device-local URI.

use crate::model::date::TodoDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier used as the sole lookup key for an item.
pub type TodoId = Uuid;

/// Opaque reference to an attached image (device-local URI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Wraps a capability-provided URI.
    ///
    /// # Errors
    /// - `PhotoRefError::Empty` when the URI is blank.
    pub fn new(uri: impl Into<String>) -> Result<Self, PhotoRefError> {
        let uri = uri.into();
        let trimmed = uri.trim();
        if trimmed.is_empty() {
            return Err(PhotoRefError::Empty);
        }
        if trimmed.len() == uri.len() {
            return Ok(Self(uri));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for PhotoRef {
    type Error = PhotoRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhotoRef> for String {
    fn from(value: PhotoRef) -> Self {
        value.0
    }
}

/// Photo reference construction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoRefError {
    Empty,
}

impl Display for PhotoRefError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "photo uri must not be empty"),
        }
    }
}

impl Error for PhotoRefError {}

/// Item validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    NilId,
    EmptyTitle,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "todo id must not be nil"),
            Self::EmptyTitle => write!(f, "todo title must not be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// One entry of the to-do list.
///
/// Serialized as `{"id", "title", "date": "YYYY-MM-DD", "photo"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TodoItemRecord")]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub date: TodoDate,
    pub photo: Option<PhotoRef>,
}

impl TodoItem {
    /// Creates a new item with a freshly generated id.
    ///
    /// The title is trimmed before validation.
    pub fn new(
        title: impl Into<String>,
        date: TodoDate,
        photo: Option<PhotoRef>,
    ) -> Result<Self, TodoValidationError> {
        Self::with_id(Uuid::new_v4(), title, date, photo)
    }

    /// Creates an item with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyTitle` when the trimmed title is empty.
    pub fn with_id(
        id: TodoId,
        title: impl Into<String>,
        date: TodoDate,
        photo: Option<PhotoRef>,
    ) -> Result<Self, TodoValidationError> {
        let item = Self {
            id,
            title: title.into().trim().to_string(),
            date,
            photo,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks the item invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct TodoItemRecord {
    id: TodoId,
    title: String,
    date: TodoDate,
    #[serde(default)]
    photo: Option<PhotoRef>,
}

impl TryFrom<TodoItemRecord> for TodoItem {
    type Error = TodoValidationError;

    fn try_from(value: TodoItemRecord) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.title, value.date, value.photo)
    }
}

//! Todo Entity
//!
//! A titled task with a completion flag, plus the request bodies that create
//! and change it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

pub const TITLE_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// A todo as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned on create
    pub id: u32,
    pub title: String,
    /// Optional details, `null` on the wire when absent
    pub description: Option<String>,
    /// Completion status
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create an open todo stamped with the current time
    pub fn new(id: u32, title: String, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
            is_done: false,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the fields present in `changes`
    pub fn apply(&mut self, changes: TodoChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(is_done) = changes.is_done {
            self.is_done = is_done;
        }
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body of `POST /todos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_title(&self.title)?;
        validate_description(self.description.as_deref())
    }
}

/// Body of `PATCH /todos/{id}`; absent fields stay untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TodoChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_done: Option<bool>,
}

impl TodoChanges {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        validate_description(self.description.as_deref())
    }
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidInput("title should not be empty".into()));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(DomainError::InvalidInput(format!(
            "title must be shorter than or equal to {} characters",
            TITLE_MAX_LEN
        )));
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> DomainResult<()> {
    match description {
        Some(d) if d.chars().count() > DESCRIPTION_MAX_LEN => Err(DomainError::InvalidInput(format!(
            "description must be shorter than or equal to {} characters",
            DESCRIPTION_MAX_LEN
        ))),
        _ => Ok(()),
    }
}

//! Todo Repository Implementation
//!
//! In-memory implementation of Repository<Todo>. Data lives as long as the process.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, NewTodo, Todo, TodoChanges};
use super::traits::Repository;

struct TodoTable {
    rows: Vec<Todo>,
    last_id: u32,
}

/// In-memory implementation of Todo repository
pub struct TodoRepository {
    table: Mutex<TodoTable>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(TodoTable {
                rows: Vec::new(),
                last_id: 0,
            }),
        }
    }

    /// Repository holding the two sample todos
    pub fn seeded() -> Self {
        let first = Todo::new(
            1,
            "Study Axum".to_string(),
            Some("Read the official docs and follow the examples.".to_string()),
        );
        let mut second = Todo::new(
            2,
            "Review Rust".to_string(),
            Some("Go over ownership, traits and generics again.".to_string()),
        );
        second.is_done = true;

        Self {
            table: Mutex::new(TodoTable {
                rows: vec![first, second],
                last_id: 2,
            }),
        }
    }

    fn not_found(id: u32) -> DomainError {
        DomainError::NotFound(format!("Todo with ID {} not found", id))
    }
}

impl Default for TodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    type Draft = NewTodo;
    type Changes = TodoChanges;

    async fn create(&self, draft: NewTodo) -> DomainResult<Todo> {
        draft.validate()?;

        let mut table = self.table.lock().await;
        // IDs are never reused, even after deletes
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| DomainError::Internal("todo id space exhausted".into()))?;
        table.last_id = id;

        let todo = Todo::new(id, draft.title, draft.description);
        table.rows.push(todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let table = self.table.lock().await;
        Ok(table.rows.clone())
    }

    async fn update(&self, id: u32, changes: TodoChanges) -> DomainResult<Todo> {
        changes.validate()?;

        let mut table = self.table.lock().await;
        let todo = table
            .rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        todo.apply(changes);
        Ok(todo.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut table = self.table.lock().await;
        let index = table
            .rows
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        table.rows.remove(index);
        Ok(())
    }
}

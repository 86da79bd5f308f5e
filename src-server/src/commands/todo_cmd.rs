//! Handlers for Todo CRUD
//!
//! Exposes Todo operations over `/todos`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::{parse_body, parse_id};
use crate::domain::{DomainError, NewTodo, Todo, TodoChanges};
use crate::repository::Repository;
use crate::AppState;

/// Body returned by a successful delete
#[derive(Debug, Serialize)]
pub struct DeletedMessage {
    pub message: String,
}

/// List all todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, DomainError> {
    state.todos.list().await.map(Json)
}

/// Get todo by ID
pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Todo>, DomainError> {
    let id = parse_id(id)?;
    state
        .todos
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::NotFound(format!("Todo with ID {} not found", id)))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), DomainError> {
    let draft = parse_body(body)?;
    let todo = state.todos.create(draft).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update the fields present in the body
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    body: Result<Json<TodoChanges>, JsonRejection>,
) -> Result<Json<Todo>, DomainError> {
    let id = parse_id(id)?;
    let changes = parse_body(body)?;
    let todo = state.todos.update(id, changes).await?;
    tracing::debug!(id, is_done = todo.is_done, "todo updated");
    Ok(Json(todo))
}

/// Delete todo
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<DeletedMessage>, DomainError> {
    let id = parse_id(id)?;
    state.todos.delete(id).await?;
    tracing::info!(id, "todo deleted");
    Ok(Json(DeletedMessage {
        message: format!("Todo with ID {} has been deleted.", id),
    }))
}

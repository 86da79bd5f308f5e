//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and chrono for serialization).

mod entity;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::{NewTodo, Todo, TodoChanges};

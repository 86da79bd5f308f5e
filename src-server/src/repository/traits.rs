//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Input needed to create an entity
    type Draft: Send + 'static;
    /// Partial update of an entity
    type Changes: Send + 'static;

    /// Create a new entity, assigning its ID
    async fn create(&self, draft: Self::Draft) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Apply changes to an existing entity
    async fn update(&self, id: T::Id, changes: Self::Changes) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

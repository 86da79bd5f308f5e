//! Synchronizer Collaborators
//!
//! Abstract interfaces the synchronizer talks to.
//! The browser app wires HTTP, localStorage, toasts and signals; tests wire recorders.

use async_trait::async_trait;

use crate::api::ApiResult;
use crate::models::{Todo, TodoPatch};
use crate::view::TodoView;

/// The authoritative todo collection
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Fetch the whole collection
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the store assigns its id
    async fn create(&self, title: &str) -> ApiResult<Todo>;

    /// Apply the present fields of `patch`
    async fn update(&self, id: u32, patch: &TodoPatch) -> ApiResult<Todo>;

    async fn delete(&self, id: u32) -> ApiResult<()>;
}

/// Single-slot snapshot of the last confirmed list
///
/// Best-effort: implementations swallow their own failures.
pub trait LocalCache {
    fn read(&self) -> Option<Vec<Todo>>;
    fn write(&self, todos: &[Todo]);
}

/// User-visible transient messages
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Receives every freshly derived view
pub trait ViewSink {
    fn render(&self, view: TodoView);
    fn set_loading(&self, loading: bool);
}

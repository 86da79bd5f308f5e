//! Todo Synchronizer
//!
//! Keeps the local todo list consistent with the Remote Store.
//!
//! Toggle and delete are applied locally first and rolled back when the
//! server call fails; create and rename wait for the server. State is only
//! touched between awaits, so no render ever sees a half-applied mutation.

mod traits;


use std::cell::RefCell;
use std::rc::Rc;

use futures::future::join_all;

use crate::api::ApiError;
use crate::models::{Filter, Todo, TodoPatch};
use crate::view::{derive_view, TodoView};

pub use traits::{LocalCache, Notifier, RemoteStore, ViewSink};

/// Remote operations, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Load,
    Create,
    Update,
    Delete,
    ClearCompleted,
}

impl Operation {
    fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Failed to load todos from the server.",
            Operation::Create => "Failed to add the todo.",
            Operation::Update => "Failed to update the todo.",
            Operation::Delete => "Failed to delete the todo.",
            Operation::ClearCompleted => "Failed to clear completed todos.",
        }
    }
}

#[derive(Debug, Default)]
struct TodoState {
    todos: Vec<Todo>,
    filter: Filter,
}

/// Owner of the todo list and the active filter
pub struct TodoSync {
    remote: Rc<dyn RemoteStore>,
    cache: Rc<dyn LocalCache>,
    notifier: Rc<dyn Notifier>,
    sink: Rc<dyn ViewSink>,
    // Never borrowed across an await
    state: RefCell<TodoState>,
}

impl TodoSync {
    pub fn new(
        remote: Rc<dyn RemoteStore>,
        cache: Rc<dyn LocalCache>,
        notifier: Rc<dyn Notifier>,
        sink: Rc<dyn ViewSink>,
    ) -> Self {
        Self {
            remote,
            cache,
            notifier,
            sink,
            state: RefCell::new(TodoState::default()),
        }
    }

    // ========================
    // Accessors
    // ========================

    #[cfg(test)]
    pub fn todos(&self) -> Vec<Todo> {
        self.state.borrow().todos.clone()
    }

    #[cfg(test)]
    pub fn filter(&self) -> Filter {
        self.state.borrow().filter
    }

    pub fn view(&self) -> TodoView {
        let state = self.state.borrow();
        derive_view(&state.todos, state.filter)
    }

    // ========================
    // Operations
    // ========================

    /// Render the cached snapshot right away, then replace it with the server's list
    pub async fn load_initial(&self) {
        match self.cache.read() {
            Some(cached) => {
                log::debug!("[sync] Rendering {} cached todos", cached.len());
                self.state.borrow_mut().todos = cached;
                self.render();
            }
            None => self.set_loading(true),
        }

        match self.remote.list().await {
            Ok(fetched) => {
                log::debug!("[sync] Loaded {} todos", fetched.len());
                self.state.borrow_mut().todos = fetched;
                self.persist();
                self.render();
            }
            Err(e) => {
                self.fail(Operation::Load, &e);
                self.render();
            }
        }

        self.set_loading(false);
    }

    /// Create a todo once the server has assigned its id.
    ///
    /// Returns `true` when the todo was added, so the caller can clear its input.
    pub async fn create_todo(&self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        match self.remote.create(title).await {
            Ok(created) => {
                {
                    let mut state = self.state.borrow_mut();
                    match state.todos.iter_mut().find(|t| t.id == created.id) {
                        Some(existing) => *existing = created,
                        None => state.todos.push(created),
                    }
                }
                self.persist();
                self.render();
                true
            }
            Err(e) => {
                self.fail(Operation::Create, &e);
                false
            }
        }
    }

    /// Optimistically set `is_done`; only that field is restored on failure
    pub async fn toggle_status(&self, id: u32, is_done: bool) {
        let previous = {
            let mut state = self.state.borrow_mut();
            let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) else {
                return;
            };
            std::mem::replace(&mut todo.is_done, is_done)
        };
        self.render();

        match self.remote.update(id, &TodoPatch::status(is_done)).await {
            Ok(_) => self.persist(),
            Err(e) => {
                if let Some(todo) = self.state.borrow_mut().todos.iter_mut().find(|t| t.id == id) {
                    todo.is_done = previous;
                }
                self.render();
                self.fail(Operation::Update, &e);
            }
        }
    }

    /// Apply an inline title edit after the server accepts it.
    ///
    /// Blank or unchanged titles are discarded without a request. Returns
    /// `true` when the new title was applied.
    pub async fn rename_todo(&self, id: u32, title: &str) -> bool {
        let title = title.trim();
        let discard = match self.state.borrow().todos.iter().find(|t| t.id == id) {
            Some(todo) => title.is_empty() || todo.title == title,
            None => true,
        };
        if discard {
            return false;
        }

        match self.remote.update(id, &TodoPatch::title(title)).await {
            Ok(_) => {
                if let Some(todo) = self.state.borrow_mut().todos.iter_mut().find(|t| t.id == id) {
                    todo.title = title.to_string();
                }
                self.persist();
                self.render();
                true
            }
            Err(e) => {
                self.render();
                self.fail(Operation::Update, &e);
                false
            }
        }
    }

    /// Optimistically remove a todo; the whole prior list comes back on failure
    pub async fn delete_todo(&self, id: u32) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            if !state.todos.iter().any(|t| t.id == id) {
                return;
            }
            let snapshot = state.todos.clone();
            state.todos.retain(|t| t.id != id);
            snapshot
        };
        self.render();

        match self.remote.delete(id).await {
            Ok(()) => self.persist(),
            Err(e) => {
                self.restore(snapshot);
                self.render();
                self.fail(Operation::Delete, &e);
            }
        }
    }

    /// Delete every completed todo concurrently, all or nothing.
    ///
    /// One failed delete restores the full prior list, including entries
    /// whose own delete succeeded.
    pub async fn clear_completed(&self) {
        let (snapshot, completed) = {
            let mut state = self.state.borrow_mut();
            let completed: Vec<u32> = state.todos.iter().filter(|t| t.is_done).map(|t| t.id).collect();
            if completed.is_empty() {
                return;
            }
            let snapshot = state.todos.clone();
            state.todos.retain(|t| !t.is_done);
            (snapshot, completed)
        };
        self.render();

        let results = join_all(completed.iter().map(|&id| self.remote.delete(id))).await;
        let failures: Vec<ApiError> = results.into_iter().filter_map(Result::err).collect();

        match failures.first() {
            None => self.persist(),
            Some(first) => {
                log::warn!("[sync] {} of {} deletes failed", failures.len(), completed.len());
                self.restore(snapshot);
                self.render();
                self.fail(Operation::ClearCompleted, first);
            }
        }
    }

    /// Change the rendered subset. Selecting the current filter is a no-op.
    pub fn set_filter(&self, filter: Filter) {
        {
            let mut state = self.state.borrow_mut();
            if state.filter == filter {
                return;
            }
            state.filter = filter;
        }
        self.render();
    }

    // ========================
    // Helpers
    // ========================

    fn render(&self) {
        let view = self.view();
        self.sink.render(view);
    }

    fn set_loading(&self, loading: bool) {
        self.sink.set_loading(loading);
    }

    fn persist(&self) {
        let state = self.state.borrow();
        self.cache.write(&state.todos);
    }

    fn restore(&self, snapshot: Vec<Todo>) {
        self.state.borrow_mut().todos = snapshot;
    }

    fn fail(&self, op: Operation, error: &ApiError) {
        log::warn!("[sync] {:?} failed: {}", op, error);
        self.notifier.notify(op.failure_message());
    }
}

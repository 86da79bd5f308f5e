//! Application Context
//!
//! Shared synchronizer and view signals provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Filter;
use crate::sync::{TodoSync, ViewSink};
use crate::toast::Toast;
use crate::view::TodoView;

/// `ViewSink` that publishes into signals
pub struct SignalSink {
    view: RwSignal<TodoView>,
    loading: RwSignal<bool>,
}

impl SignalSink {
    pub fn new(view: RwSignal<TodoView>, loading: RwSignal<bool>) -> Self {
        Self { view, loading }
    }
}

impl ViewSink for SignalSink {
    fn render(&self, view: TodoView) {
        self.view.set(view);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The synchronizer lives on the UI thread only
    sync: StoredValue<Rc<TodoSync>, LocalStorage>,
    /// Latest derived view
    pub view: ReadSignal<TodoView>,
    /// Initial fetch without a cached snapshot is in flight
    pub loading: ReadSignal<bool>,
    /// Visible toasts
    pub toasts: ReadSignal<Vec<Toast>>,
}

impl AppContext {
    pub fn new(
        sync: Rc<TodoSync>,
        view: ReadSignal<TodoView>,
        loading: ReadSignal<bool>,
        toasts: ReadSignal<Vec<Toast>>,
    ) -> Self {
        Self {
            sync: StoredValue::new_local(sync),
            view,
            loading,
            toasts,
        }
    }

    /// Run a synchronizer operation on the UI task queue
    fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<TodoSync>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let sync = self.sync.get_value();
        spawn_local(async move { op(sync).await });
    }

    pub fn load(&self) {
        self.spawn(|sync| async move { sync.load_initial().await });
    }

    /// `on_created` runs only when the todo was added
    pub fn create(&self, title: String, on_created: impl FnOnce() + 'static) {
        self.spawn(move |sync| async move {
            if sync.create_todo(&title).await {
                on_created();
            }
        });
    }

    pub fn toggle(&self, id: u32, is_done: bool) {
        self.spawn(move |sync| async move { sync.toggle_status(id, is_done).await });
    }

    pub fn rename(&self, id: u32, title: String) {
        self.spawn(move |sync| async move {
            sync.rename_todo(id, &title).await;
        });
    }

    pub fn delete(&self, id: u32) {
        self.spawn(move |sync| async move { sync.delete_todo(id).await });
    }

    pub fn clear_completed(&self) {
        self.spawn(|sync| async move { sync.clear_completed().await });
    }

    pub fn set_filter(&self, filter: Filter) {
        self.sync.with_value(|sync| sync.set_filter(filter));
    }
}

//! Todo Sync Frontend App
//!
//! Wires the synchronizer to its browser collaborators and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::HttpRemoteStore;
use crate::cache::BrowserCache;
use crate::components::{FilterBar, NewTodoForm, ToastContainer, TodoFooter, TodoList};
use crate::config::ApiConfig;
use crate::context::{AppContext, SignalSink};
use crate::sync::TodoSync;
use crate::toast::{Toast, ToastNotifier};
use crate::view::TodoView;

#[component]
pub fn App() -> impl IntoView {
    // State
    let todo_view = RwSignal::new(TodoView::default());
    let loading = RwSignal::new(false);
    let toasts = RwSignal::new(Vec::<Toast>::new());

    let config = ApiConfig::from_build_env();
    log::info!("[APP] Remote store at {}", config.todos_url());

    let sync = Rc::new(TodoSync::new(
        Rc::new(HttpRemoteStore::new(config)),
        Rc::new(BrowserCache::new()),
        Rc::new(ToastNotifier::new(toasts)),
        Rc::new(SignalSink::new(todo_view, loading)),
    ));

    // Provide context to all children
    let ctx = AppContext::new(sync, todo_view.read_only(), loading.read_only(), toasts.read_only());
    provide_context(ctx);

    // Cached snapshot renders synchronously, the fetch continues in the background
    ctx.load();

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todos"</h1>

                <NewTodoForm />
                <FilterBar />

                <Show when=move || ctx.loading.get()>
                    <div class="loader">"Loading..."</div>
                </Show>

                <TodoList />
                <TodoFooter />
            </main>

            <ToastContainer />
        </div>
    }
}

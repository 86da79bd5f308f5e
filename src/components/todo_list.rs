//! Todo List Component
//!
//! Filtered todos, or a placeholder when nothing matches.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::AppContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul class="todo-list">
            <Show
                when=move || !ctx.view.get().is_empty()
                fallback=|| view! { <li class="todo-item placeholder">"Nothing to show."</li> }
            >
                // Keyed on content so a changed todo gets a fresh row
                <For
                    each=move || ctx.view.get().items
                    key=|todo| (todo.id, todo.is_done, todo.title.clone())
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </Show>
        </ul>
    }
}

//! New Todo Form Component
//!
//! Title input for creating todos.

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank titles are dropped by the synchronizer
        ctx.create(new_title.get(), move || set_new_title.set(String::new()));
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                class="title-input"
                placeholder="What needs to be done?"
                maxlength="50"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

//! Todo Item Component
//!
//! Single row: checkbox, title with inline edit, delete button.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Todo;

/// A single todo row
///
/// Double-click the title to edit it. Enter or leaving the field saves,
/// Escape cancels.
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id;
    let is_done = todo.is_done;
    let title = todo.title.clone();

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(title.clone());
    let edit_input = NodeRef::<Input>::new();

    // Focus the field as soon as it is mounted
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_input.get() {
                let _ = input.focus();
            }
        }
    });

    // Enter and blur can both fire for one edit; only the first one saves
    let save = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        ctx.rename(id, draft.get_untracked());
    };

    let start_edit = {
        let title = title.clone();
        move |_| {
            set_draft.set(title.clone());
            set_editing.set(true);
        }
    };

    view! {
        <li class=if is_done { "todo-item done" } else { "todo-item" } data-id=id>
            <input
                type="checkbox"
                class="checkbox"
                prop:checked=is_done
                on:change=move |ev| ctx.toggle(id, event_target_checked(&ev))
            />

            <div class="todo-content" on:dblclick=start_edit>
                <Show
                    when=move || editing.get()
                    fallback={
                        let title = title.clone();
                        move || view! { <span class="todo-title">{title.clone()}</span> }
                    }
                >
                    <input
                        type="text"
                        class="edit-input"
                        node_ref=edit_input
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:blur=move |_| save()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => save(),
                                "Escape" => set_editing.set(false),
                                _ => {}
                            }
                        }
                    />
                </Show>
            </div>

            <button class="delete-button" on:click=move |_| ctx.delete(id)>"×"</button>
        </li>
    }
}

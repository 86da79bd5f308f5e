//! Todo Footer Component
//!
//! Remaining counter and the clear-completed control.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::context::AppContext;

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let counter = move || {
        let active = ctx.view.get().active_count;
        if active == 1 {
            "1 item left".to_string()
        } else {
            format!("{} items left", active)
        }
    };

    view! {
        <footer class="todo-footer">
            <span class="todo-counter">{counter}</span>

            <Show when=move || ctx.view.get().has_completed()>
                <ConfirmButton
                    button_class="clear-completed-button"
                    label="Clear completed"
                    prompt=Signal::derive(move || {
                        format!("Delete {} completed?", ctx.view.get().completed_count)
                    })
                    on_confirm=Callback::new(move |_| ctx.clear_completed())
                />
            </Show>
        </footer>
    }
}

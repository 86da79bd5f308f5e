//! Toast Container Component
//!
//! Visible queue of error toasts.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-container">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=|toast| view! { <div class="toast">{toast.message}</div> }
            />
        </div>
    }
}

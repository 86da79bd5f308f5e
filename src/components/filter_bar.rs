//! Filter Bar Component
//!
//! All / Active / Completed selector buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-controls">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || ctx.view.get().filter == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-button active" } else { "filter-button" }
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

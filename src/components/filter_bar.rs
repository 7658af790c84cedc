//! Filter Bar Component
//!
//! All/Active/Completed button row shared by both variants.

use leptos::prelude::*;

use crate::models::Filter;

#[component]
pub fn FilterBar(
    #[prop(into)] filter: Signal<Filter>,
    #[prop(into)] on_select: Callback<Filter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&option| {
                let is_active = move || filter.get() == option;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| on_select.run(option)
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

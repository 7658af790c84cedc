//! Stats Bar Component
//!
//! Summary counts for the remote variant.

use leptos::prelude::*;

use crate::store::todos::{use_todos_store, TodosStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_todos_store();
    let stats = move || store.stats().get();

    view! {
        <div class="stats-bar">
            <span class="stat">{move || format!("Total: {}", stats().total)}</span>
            <span class="stat">{move || format!("Pending: {}", stats().pending)}</span>
            <span class="stat">{move || format!("Completed: {}", stats().completed)}</span>
            <span class="stat overdue">{move || format!("Overdue: {}", stats().overdue)}</span>
        </div>
    }
}

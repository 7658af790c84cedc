//! Local Todos Panel
//!
//! The standalone localStorage-backed list: add form, filtered list,
//! remaining count and clear-completed.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::models::filter_todos;
use crate::store::local::{self, use_local_store, LocalStateStoreFields};

#[component]
pub fn LocalPanel() -> impl IntoView {
    let store = use_local_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        local::add(&store);
    };

    let visible = move || {
        let filter = store.filter().get();
        filter_todos(&store.todos().read(), filter)
    };
    let active_count = move || store.todos().read().iter().filter(|t| !t.completed).count();
    let has_completed = move || store.todos().read().iter().any(|t| t.completed);

    view! {
        <section class="local-todos">
            <form class="new-todo-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || store.new_todo().get()
                    on:input=move |ev| store.new_todo().set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <FilterBar
                filter=Signal::derive(move || store.filter().get())
                on_select=move |filter| store.filter().set(filter)
            />

            <ul class="todo-list">
                {move || visible().into_iter().map(|todo| {
                    let id = todo.id;
                    let completed = todo.completed;
                    view! {
                        <li class=if completed { "todo done" } else { "todo" }>
                            <input
                                type="checkbox"
                                prop:checked=completed
                                on:change=move |_| local::set_completed(&store, id, !completed)
                            />
                            <span class="todo-text">{todo.text}</span>
                            <button
                                type="button"
                                class="delete-btn"
                                on:click=move |_| local::remove(&store, id)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <footer class="todo-footer">
                <span class="item-count">
                    {move || format!("{} left", active_count())}
                </span>
                {move || has_completed().then(|| view! {
                    <button
                        type="button"
                        class="clear-completed-btn"
                        on:click=move |_| local::clear_completed(&store)
                    >
                        "Clear completed"
                    </button>
                })}
            </footer>
        </section>
    }
}

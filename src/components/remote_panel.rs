//! Remote Todos Panel
//!
//! The account-backed list: greeting and logout, stats, create form,
//! filter bar and the list itself.

use leptos::prelude::*;

use crate::components::{ErrorNotice, FilterBar, NewTodoForm, StatsBar, TodoList};
use crate::store::auth::{self, use_auth_store, AuthStateStoreFields};
use crate::store::todos::{self, use_todos_store, TodosStateStoreFields};

#[component]
pub fn RemotePanel() -> impl IntoView {
    let todos_store = use_todos_store();
    let auth_store = use_auth_store();

    let user_name = move || {
        auth_store
            .session()
            .read()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };

    view! {
        <section class="remote-todos">
            <header class="remote-header">
                <span class="greeting">{move || format!("Hi, {}", user_name())}</span>
                <button type="button" class="logout-btn" on:click=move |_| auth::logout(&auth_store)>
                    "Log out"
                </button>
            </header>

            <ErrorNotice
                message=Signal::derive(move || todos_store.error().get())
                on_dismiss=move |_| todos::clear_error(&todos_store)
            />

            <StatsBar />
            <NewTodoForm />
            <FilterBar
                filter=Signal::derive(move || todos_store.filter().get())
                on_select=move |filter| todos::set_filter(&todos_store, filter)
            />

            {move || todos_store.loading().get().then(|| view! {
                <p class="loading">"Loading..."</p>
            })}

            <TodoList />
        </section>
    }
}

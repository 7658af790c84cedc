//! Application Root
//!
//! Creates the three stores, provides them via context, and switches
//! between the local prototype and the account-backed variant.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AuthPanel, LocalPanel, RemotePanel};
use crate::store::auth::{AuthState, AuthStateStoreFields};
use crate::store::local::LocalState;
use crate::store::todos::{self, TodosState};

/// Which variant is on screen
#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Local,
    Account,
}

#[component]
pub fn App() -> impl IntoView {
    let local_store = Store::new(LocalState::load());
    let auth_store = Store::new(AuthState::restore());
    let todos_store = Store::new(TodosState::default());
    provide_context(local_store);
    provide_context(auth_store);
    provide_context(todos_store);

    let (tab, set_tab) = signal(Tab::Local);

    // Refresh the remote list whenever a session becomes available
    // (rehydrated at startup or established by login/signup)
    Effect::new(move |_| {
        let token = auth_store.session().read().token().map(str::to_string);
        if let Some(token) = token {
            web_sys::console::log_1(&"[APP] session active, loading todos".into());
            spawn_local(async move {
                todos::fetch_todos(todos_store, token.clone()).await;
                todos::fetch_stats(todos_store, token).await;
            });
        }
    });

    let tab_class = move |target: Tab| {
        if tab.get() == target { "tab-btn active" } else { "tab-btn" }
    };

    view! {
        <div class="app-layout">
            <nav class="tab-bar">
                <button
                    type="button"
                    class=move || tab_class(Tab::Local)
                    on:click=move |_| set_tab.set(Tab::Local)
                >
                    "Local"
                </button>
                <button
                    type="button"
                    class=move || tab_class(Tab::Account)
                    on:click=move |_| set_tab.set(Tab::Account)
                >
                    "Account"
                </button>
            </nav>

            <main class="main-content">
                {move || match tab.get() {
                    Tab::Local => view! { <LocalPanel /> }.into_any(),
                    Tab::Account => {
                        if auth_store.session().read().is_authenticated() {
                            view! { <RemotePanel /> }.into_any()
                        } else {
                            view! { <AuthPanel /> }.into_any()
                        }
                    }
                }}
            </main>
        </div>
    }
}

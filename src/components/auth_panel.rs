//! Auth Panel Component
//!
//! Login/signup form with mode switch, error notice and loading-disabled
//! submit. Successful auth flips the session store; the parent decides
//! what renders next.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorNotice;
use crate::store::auth::{self, use_auth_store, AuthStateStoreFields};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let store = use_auth_store();

    let (signup_mode, set_signup_mode) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        let is_signup = signup_mode.get();

        spawn_local(async move {
            let ok = if is_signup {
                auth::signup(store, name_value, email_value, password_value).await
            } else {
                auth::login(store, email_value, password_value).await
            };
            if ok {
                set_password.set(String::new());
            }
        });
    };

    let switch_mode = move |_| {
        set_signup_mode.update(|m| *m = !*m);
        auth::clear_error(&store);
    };

    view! {
        <section class="auth-panel">
            <h2>{move || if signup_mode.get() { "Sign up" } else { "Log in" }}</h2>

            <ErrorNotice
                message=Signal::derive(move || store.error().get())
                on_dismiss=move |_| auth::clear_error(&store)
            />

            <form class="auth-form" on:submit=submit>
                {move || signup_mode.get().then(|| view! {
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                })}
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" prop:disabled=move || store.loading().get()>
                    {move || if store.loading().get() {
                        "Please wait..."
                    } else if signup_mode.get() {
                        "Create account"
                    } else {
                        "Log in"
                    }}
                </button>
            </form>

            <button type="button" class="mode-switch" on:click=switch_mode>
                {move || if signup_mode.get() {
                    "Already registered? Log in"
                } else {
                    "No account? Sign up"
                }}
            </button>
        </section>
    }
}

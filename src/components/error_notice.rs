//! Error Notice Component
//!
//! Dismissible banner for the stores' error fields.

use leptos::prelude::*;

#[component]
pub fn ErrorNotice(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="error-notice" role="alert">
                <span>{msg}</span>
                <button type="button" on:click=move |_| on_dismiss.run(())>"×"</button>
            </div>
        })}
    }
}

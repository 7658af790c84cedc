//! New Todo Form Component
//!
//! Create form for the remote variant: text plus optional due date from a
//! datetime-local input.

use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::NewTodo;
use crate::store::auth::{use_auth_store, AuthStateStoreFields};
use crate::store::todos::{self, use_todos_store};

/// Parse a datetime-local input value ("2026-08-27T14:30"); empty means
/// no due date. The wall-clock value is taken as UTC.
fn parse_due(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let todos_store = use_todos_store();
    let auth_store = use_auth_store();

    let (text, set_text) = signal(String::new());
    let (due, set_due) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = text.get().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        let Some(token) = auth_store.session().read().token().map(str::to_string) else {
            return;
        };
        let draft = NewTodo { text: trimmed, due_date: parse_due(&due.get()) };

        spawn_local(async move {
            if todos::create_todo(todos_store, token, draft).await.is_some() {
                set_text.set(String::new());
                set_due.set(String::new());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a todo..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <input
                type="datetime-local"
                prop:value=move || due.get()
                on:input=move |ev| set_due.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due() {
        assert!(parse_due("").is_none());
        assert!(parse_due("not a date").is_none());

        let due = parse_due("2026-08-27T14:30").unwrap();
        assert_eq!(due.to_rfc3339(), "2026-08-27T14:30:00+00:00");
    }
}

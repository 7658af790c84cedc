//! Todo List Component
//!
//! Remote-variant list rows: toggle checkbox, inline text edit, delete,
//! and overdue marking against the current time. The list is rebuilt
//! whenever the sequence or filter changes.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{filter_todos, UpdateTodo};
use crate::store::auth::{use_auth_store, AuthStateStoreFields};
use crate::store::todos::{self, use_todos_store, TodosStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let todos_store = use_todos_store();
    let auth_store = use_auth_store();

    let (editing, set_editing) = signal::<Option<u32>>(None);
    let (edit_text, set_edit_text) = signal(String::new());

    let visible = move || {
        let filter = todos_store.filter().get();
        filter_todos(&todos_store.todos().read(), filter)
    };
    let token = move || auth_store.session().read().token().map(str::to_string);

    view! {
        <ul class="todo-list">
            {move || visible().into_iter().map(|todo| {
                let id = todo.id;
                let completed = todo.completed;
                let due_date = todo.due_date;
                let overdue = todo.is_overdue(Utc::now());
                let row_class = if completed {
                    "todo done"
                } else if overdue {
                    "todo overdue"
                } else {
                    "todo"
                };

                let toggle = move |_| {
                    if let Some(token) = token() {
                        spawn_local(async move {
                            todos::toggle_todo(todos_store, token, id).await;
                        });
                    }
                };
                let start_edit = {
                    let text = todo.text.clone();
                    move |_| {
                        set_edit_text.set(text.clone());
                        set_editing.set(Some(id));
                    }
                };
                let save_edit = move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    let new_text = edit_text.get().trim().to_string();
                    if new_text.is_empty() {
                        return;
                    }
                    let Some(token) = token() else { return };
                    let patch = UpdateTodo { text: new_text, due_date };
                    spawn_local(async move {
                        if todos::update_todo(todos_store, token, id, patch).await.is_some() {
                            set_editing.set(None);
                        }
                    });
                };
                let delete = move |_| {
                    if let Some(token) = token() {
                        spawn_local(async move {
                            todos::delete_todo(todos_store, token, id).await;
                        });
                    }
                };

                view! {
                    <li class=row_class>
                        <input type="checkbox" prop:checked=completed on:change=toggle />
                        {move || if editing.get() == Some(id) {
                            view! {
                                <form class="edit-form" on:submit=save_edit>
                                    <input
                                        type="text"
                                        prop:value=move || edit_text.get()
                                        on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                                    />
                                    <button type="submit">"Save"</button>
                                    <button type="button" on:click=move |_| set_editing.set(None)>
                                        "Cancel"
                                    </button>
                                </form>
                            }.into_any()
                        } else {
                            view! {
                                <span class="todo-label" on:dblclick=start_edit.clone()>
                                    <span class="todo-text">{todo.text.clone()}</span>
                                    {due_date.map(|due| view! {
                                        <span class="due-date">
                                            {due.format("%Y-%m-%d %H:%M").to_string()}
                                        </span>
                                    })}
                                </span>
                            }.into_any()
                        }}
                        <button type="button" class="delete-btn" on:click=delete>"×"</button>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}

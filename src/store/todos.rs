//! Remote Todo Store
//!
//! Server-backed todo sequence plus a stats aggregate. The aggregate is
//! reconciled from the sequence after every local mutation instead of
//! patched with per-operation counter arithmetic, so it cannot drift.
//! Transport failures leave the sequence untouched and set `error`.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{Filter, NewTodo, Stats, Todo, UpdateTodo};

#[derive(Clone, Debug, Default, Store)]
pub struct TodosState {
    /// Full sequence as last seen from the server, newest first
    pub todos: Vec<Todo>,
    pub stats: Stats,
    /// UI-only busy flag, not a concurrency guard
    pub loading: bool,
    pub error: Option<String>,
    pub filter: Filter,
}

pub type TodosStore = Store<TodosState>;

/// Get the remote todos store from context
pub fn use_todos_store() -> TodosStore {
    expect_context::<TodosStore>()
}

// ========================
// Operations
// ========================

/// Full overwrite of the sequence from the server; no merge.
pub async fn fetch_todos(store: TodosStore, token: String) {
    store.loading().set(true);
    store.error().set(None);
    let result = api::fetch_todos(&token).await;
    store.loading().set(false);

    match result {
        Ok(todos) => {
            store.todos().set(todos);
            refresh_stats(&store);
        }
        Err(err) => store.error().set(Some(err.display("Failed to fetch todos"))),
    }
}

/// Wholesale replace of the aggregate from the server. Failure here is
/// logged, not surfaced through `error`.
pub async fn fetch_stats(store: TodosStore, token: String) {
    match api::fetch_stats(&token).await {
        Ok(stats) => store.stats().set(stats),
        Err(err) => {
            web_sys::console::error_1(&format!("Failed to fetch stats: {err}").into());
        }
    }
}

/// Create on the server, then prepend the returned record.
pub async fn create_todo(store: TodosStore, token: String, draft: NewTodo) -> Option<Todo> {
    store.loading().set(true);
    store.error().set(None);
    let result = api::create_todo(&token, &draft).await;
    store.loading().set(false);

    match result {
        Ok(todo) => {
            store.todos().write().insert(0, todo.clone());
            refresh_stats(&store);
            Some(todo)
        }
        Err(err) => {
            store.error().set(Some(err.display("Failed to create todo")));
            None
        }
    }
}

/// Replace the matching record with the server's updated one.
pub async fn update_todo(store: TodosStore, token: String, id: u32, patch: UpdateTodo) -> Option<Todo> {
    store.error().set(None);
    match api::update_todo(&token, id, &patch).await {
        Ok(updated) => {
            replace_by_id(&mut store.todos().write(), updated.clone());
            refresh_stats(&store);
            Some(updated)
        }
        Err(err) => {
            store.error().set(Some(err.display("Failed to update todo")));
            None
        }
    }
}

/// Flip completion through the dedicated endpoint. Toggling twice returns
/// both the record and the stats to their original values.
pub async fn toggle_todo(store: TodosStore, token: String, id: u32) -> Option<Todo> {
    store.error().set(None);
    match api::toggle_todo(&token, id).await {
        Ok(toggled) => {
            replace_by_id(&mut store.todos().write(), toggled.clone());
            refresh_stats(&store);
            Some(toggled)
        }
        Err(err) => {
            store.error().set(Some(err.display("Failed to toggle todo")));
            None
        }
    }
}

/// Remove locally only after the server confirms the delete.
pub async fn delete_todo(store: TodosStore, token: String, id: u32) -> bool {
    store.error().set(None);
    match api::delete_todo(&token, id).await {
        Ok(()) => {
            store.todos().write().retain(|t| t.id != id);
            refresh_stats(&store);
            true
        }
        Err(err) => {
            store.error().set(Some(err.display("Failed to delete todo")));
            false
        }
    }
}

pub fn set_filter(store: &TodosStore, filter: Filter) {
    store.filter().set(filter);
}

pub fn clear_error(store: &TodosStore) {
    store.error().set(None);
}

// ========================
// Helpers
// ========================

/// Replace the record with the same id, if present
fn replace_by_id(todos: &mut Vec<Todo>, updated: Todo) {
    todos
        .iter_mut()
        .find(|t| t.id == updated.id)
        .map(|t| *t = updated);
}

/// Single reconciliation routine invoked after every local mutation
fn refresh_stats(store: &TodosStore) {
    let stats = Stats::of(&store.todos().read(), Utc::now());
    store.stats().set(stats);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u32, text: &str) -> Todo {
        Todo { id, text: text.into(), completed: false, due_date: None }
    }

    #[test]
    fn test_replace_by_id_swaps_only_the_match() {
        let mut todos = vec![todo(1, "a"), todo(2, "b")];
        replace_by_id(&mut todos, todo(2, "b2"));
        assert_eq!(todos[0].text, "a");
        assert_eq!(todos[1].text, "b2");
    }

    #[test]
    fn test_replace_by_id_ignores_unknown_ids() {
        let mut todos = vec![todo(1, "a")];
        replace_by_id(&mut todos, todo(9, "ghost"));
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "a");
    }
}

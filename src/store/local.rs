//! Local Todo Store
//!
//! Standalone localStorage-backed list: no account, no network. Every
//! mutation writes the full sequence and the id counter back through the
//! storage repository. The sequence mutations are plain functions over
//! `Vec<Todo>` so they can be unit-tested; the store wrappers add
//! reactivity and persistence.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Todo};
use crate::storage;

/// Local-variant state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct LocalState {
    /// Full todo sequence, oldest first
    pub todos: Vec<Todo>,
    /// Next id to assign, monotonically increasing
    pub next_id: u32,
    /// Input field contents for the add form
    pub new_todo: String,
    /// Current display filter
    pub filter: Filter,
}

impl Default for LocalState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
            new_todo: String::new(),
            filter: Filter::All,
        }
    }
}

impl LocalState {
    /// Rehydrate from storage; absent or malformed data keeps defaults.
    pub fn load() -> Self {
        let (todos, next_id) = storage::load_todos();
        Self { todos, next_id, ..Default::default() }
    }
}

pub type LocalStore = Store<LocalState>;

/// Get the local store from context
pub fn use_local_store() -> LocalStore {
    expect_context::<LocalStore>()
}

// ========================
// Sequence Mutations
// ========================

/// Append a todo with a fresh sequential id. Blank or whitespace-only text
/// is a no-op; returns whether anything changed.
pub fn push_todo(todos: &mut Vec<Todo>, next_id: &mut u32, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    todos.push(Todo {
        id: *next_id,
        text: trimmed.to_string(),
        completed: false,
        due_date: None,
    });
    *next_id += 1;
    true
}

/// Remove the matching record; absent id is a no-op.
pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) {
    todos.retain(|t| t.id != id);
}

/// Drop every completed record.
pub fn drop_completed(todos: &mut Vec<Todo>) {
    todos.retain(|t| !t.completed);
}

// ========================
// Store Operations
// ========================

/// Add a todo from the input field, then clear it and persist.
pub fn add(store: &LocalStore) {
    let text = store.new_todo().get();
    let mut todos = store.todos().get();
    let mut next_id = store.next_id().get();
    if !push_todo(&mut todos, &mut next_id, &text) {
        return;
    }
    storage::save_todos(&todos, next_id);
    store.todos().set(todos);
    store.next_id().set(next_id);
    store.new_todo().set(String::new());
}

pub fn remove(store: &LocalStore, id: u32) {
    remove_todo(&mut store.todos().write(), id);
    persist(store);
}

pub fn clear_completed(store: &LocalStore) {
    drop_completed(&mut store.todos().write());
    persist(store);
}

/// Flip a record's completion flag and persist.
pub fn set_completed(store: &LocalStore, id: u32, completed: bool) {
    store
        .todos()
        .write()
        .iter_mut()
        .find(|t| t.id == id)
        .map(|t| t.completed = completed);
    persist(store);
}

fn persist(store: &LocalStore) {
    storage::save_todos(&store.todos().read(), store.next_id().get());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_a_no_op() {
        let mut todos = Vec::new();
        let mut next_id = 1;
        assert!(!push_todo(&mut todos, &mut next_id, ""));
        assert!(!push_todo(&mut todos, &mut next_id, "   "));
        assert!(todos.is_empty());
        assert_eq!(next_id, 1);
    }

    #[test]
    fn test_add_trims_and_assigns_fresh_ids() {
        let mut todos = Vec::new();
        let mut next_id = 1;
        assert!(push_todo(&mut todos, &mut next_id, "  Buy milk  "));
        assert!(push_todo(&mut todos, &mut next_id, "Walk dog"));

        assert_eq!(todos[0].text, "Buy milk");
        assert!(!todos[0].completed);
        assert!(todos[0].due_date.is_none());
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[1].id, 2);
        assert_eq!(next_id, 3);
    }

    #[test]
    fn test_remove_matches_exactly() {
        let mut todos = Vec::new();
        let mut next_id = 1;
        push_todo(&mut todos, &mut next_id, "a");
        push_todo(&mut todos, &mut next_id, "b");

        remove_todo(&mut todos, 99); // absent id: no-op
        assert_eq!(todos.len(), 2);

        remove_todo(&mut todos, 1);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 2);
    }

    #[test]
    fn test_drop_completed_keeps_active() {
        let mut todos = Vec::new();
        let mut next_id = 1;
        push_todo(&mut todos, &mut next_id, "done");
        push_todo(&mut todos, &mut next_id, "open");
        todos[0].completed = true;

        drop_completed(&mut todos);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "open");
    }
}

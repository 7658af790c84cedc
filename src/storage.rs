//! Persistent Storage
//!
//! Typed repository over window.localStorage. Callers never touch raw keys;
//! absent or malformed values fall back to defaults. The decode helpers are
//! pure so they can be unit-tested off the browser.

use web_sys::Storage;

use crate::models::{Session, Todo, User};

const TODOS_KEY: &str = "todos";
const NEXT_ID_KEY: &str = "nextId";
const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";
const SCHEMA_KEY: &str = "schemaVersion";

/// Bump when the persisted todo shape changes; mismatched data is discarded.
const SCHEMA_VERSION: u32 = 1;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn delete(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// ========================
// Codecs
// ========================

fn decode_todos(raw: Option<String>) -> Vec<Todo> {
    raw.and_then(|r| serde_json::from_str(&r).ok()).unwrap_or_default()
}

fn decode_next_id(raw: Option<String>) -> u32 {
    raw.and_then(|r| r.parse().ok()).unwrap_or(1)
}

fn decode_session(user: Option<String>, token: Option<String>) -> Session {
    let user = user.and_then(|u| serde_json::from_str::<User>(&u).ok());
    match (user, token) {
        (Some(user), Some(token)) if !token.is_empty() => Session::Authenticated { user, token },
        _ => Session::Anonymous,
    }
}

/// An absent marker means data written before versioning existed; keep it.
fn schema_current(raw: Option<String>) -> bool {
    raw.map_or(true, |v| v.parse::<u32>() == Ok(SCHEMA_VERSION))
}

// ========================
// Repository
// ========================

/// Load the persisted local-variant list and its id counter.
/// A schema mismatch discards both and rewrites the marker.
pub fn load_todos() -> (Vec<Todo>, u32) {
    if !schema_current(read(SCHEMA_KEY)) {
        delete(TODOS_KEY);
        delete(NEXT_ID_KEY);
        write(SCHEMA_KEY, &SCHEMA_VERSION.to_string());
        return (Vec::new(), 1);
    }
    (decode_todos(read(TODOS_KEY)), decode_next_id(read(NEXT_ID_KEY)))
}

/// Write the full sequence and the id counter. Synchronous and unconditional.
pub fn save_todos(todos: &[Todo], next_id: u32) {
    if let Ok(json) = serde_json::to_string(todos) {
        write(TODOS_KEY, &json);
    }
    write(NEXT_ID_KEY, &next_id.to_string());
    write(SCHEMA_KEY, &SCHEMA_VERSION.to_string());
}

pub fn load_session() -> Session {
    decode_session(read(USER_KEY), read(TOKEN_KEY))
}

pub fn save_session(user: &User, token: &str) {
    if let Ok(json) = serde_json::to_string(user) {
        write(USER_KEY, &json);
    }
    write(TOKEN_KEY, token);
}

pub fn clear_session() {
    delete(USER_KEY);
    delete(TOKEN_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_todos_tolerates_bad_data() {
        assert!(decode_todos(None).is_empty());
        assert!(decode_todos(Some("not json".into())).is_empty());

        let todos = decode_todos(Some(r#"[{"id":1,"text":"Buy milk","completed":false}]"#.into()));
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
    }

    #[test]
    fn test_decode_next_id_defaults_to_one() {
        assert_eq!(decode_next_id(None), 1);
        assert_eq!(decode_next_id(Some("abc".into())), 1);
        assert_eq!(decode_next_id(Some("42".into())), 42);
    }

    #[test]
    fn test_decode_session_requires_both_halves() {
        let user = r#"{"id":1,"name":"Ada","email":"ada@example.com"}"#.to_string();

        assert_eq!(decode_session(None, None), Session::Anonymous);
        assert_eq!(decode_session(Some(user.clone()), None), Session::Anonymous);
        assert_eq!(decode_session(None, Some("tok".into())), Session::Anonymous);
        assert_eq!(decode_session(Some("garbage".into()), Some("tok".into())), Session::Anonymous);
        assert_eq!(decode_session(Some(user.clone()), Some(String::new())), Session::Anonymous);

        let session = decode_session(Some(user), Some("tok".into()));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));
    }

    #[test]
    fn test_schema_marker() {
        assert!(schema_current(None));
        assert!(schema_current(Some(SCHEMA_VERSION.to_string())));
        assert!(!schema_current(Some("0".into())));
        assert!(!schema_current(Some("junk".into())));
    }
}

//! Auth Session Store
//!
//! Two-state session machine (Anonymous | Authenticated) with remote
//! login/signup and persisted rehydration. `loading` exists for the UI
//! only; concurrent calls are not serialized.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{AuthResponse, Session};
use crate::storage;

#[derive(Clone, Debug, Default, Store)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Rehydrate from the persisted token/user pair; anything missing or
    /// malformed means Anonymous.
    pub fn restore() -> Self {
        Self { session: storage::load_session(), ..Default::default() }
    }
}

pub type AuthStore = Store<AuthState>;

/// Get the auth store from context
pub fn use_auth_store() -> AuthStore {
    expect_context::<AuthStore>()
}

// ========================
// Operations
// ========================

/// Anonymous -> Authenticated on success; on failure the session is left
/// alone and the error message is set. Returns whether login succeeded.
pub async fn login(store: AuthStore, email: String, password: String) -> bool {
    store.loading().set(true);
    store.error().set(None);
    let result = api::login(&email, &password).await;
    store.loading().set(false);

    match result {
        Ok(response) => {
            establish(&store, response);
            true
        }
        Err(err) => {
            store.error().set(Some(err.display("Invalid email or password")));
            false
        }
    }
}

/// Same shape as `login`; the failure message also falls back to the
/// server's field-level email error.
pub async fn signup(store: AuthStore, name: String, email: String, password: String) -> bool {
    store.loading().set(true);
    store.error().set(None);
    let result = api::signup(&name, &email, &password).await;
    store.loading().set(false);

    match result {
        Ok(response) => {
            establish(&store, response);
            true
        }
        Err(err) => {
            let message = err
                .server_message()
                .or_else(|| err.field_error("email"))
                .unwrap_or("Registration failed")
                .to_string();
            store.error().set(Some(message));
            false
        }
    }
}

/// Unconditional Authenticated -> Anonymous; clears persisted token/user.
pub fn logout(store: &AuthStore) {
    storage::clear_session();
    store.session().set(Session::Anonymous);
    store.error().set(None);
}

/// Clear the last error without a state transition.
pub fn clear_error(store: &AuthStore) {
    store.error().set(None);
}

fn establish(store: &AuthStore, response: AuthResponse) {
    storage::save_session(&response.user, &response.token);
    store.session().set(Session::Authenticated {
        user: response.user,
        token: response.token,
    });
}

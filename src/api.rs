//! HTTP API Bindings
//!
//! One async function per remote endpoint, over gloo-net. Error bodies are
//! decoded into [`ApiError`] so the stores can show the server's message
//! when it sent one.

use std::collections::HashMap;
use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{AuthResponse, NewTodo, Stats, Todo, UpdateTodo};

const API_BASE: &str = "/api";

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

// ========================
// Errors
// ========================

/// Failure of a remote call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx response; `message`/`errors` captured when the body had them
    Server {
        status: u16,
        message: Option<String>,
        errors: Option<HashMap<String, String>>,
    },
    /// The request never completed (network down, CORS, ...)
    Network(String),
    /// 2xx response whose body did not decode
    Decode(String),
}

impl ApiError {
    /// The server-provided `message`, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// A field-level validation message, if the server sent one
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::Server { errors: Some(errors), .. } => {
                errors.get(field).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Human-readable message: the server's, else the given fallback
    pub fn display(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server { status, message, .. } => {
                write!(f, "server error ({status}): {}", message.as_deref().unwrap_or("no message"))
            }
            ApiError::Network(detail) => write!(f, "network error: {detail}"),
            ApiError::Decode(detail) => write!(f, "decode error: {detail}"),
        }
    }
}

/// Error body shape the API uses for failures
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<HashMap<String, String>>,
}

fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.ok();
    let (message, errors) = match body {
        Some(body) => (body.message, body.errors),
        None => (None, None),
    };
    ApiError::Server { status, message, errors }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupArgs<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

// ========================
// Endpoints
// ========================

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&url("/auth/login"))
        .json(&LoginArgs { email, password })
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode(response).await
}

pub async fn signup(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&url("/auth/signup"))
        .json(&SignupArgs { name, email, password })
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode(response).await
}

pub async fn fetch_todos(token: &str) -> Result<Vec<Todo>, ApiError> {
    let response = authorized(Request::get(&url("/todos")), token)
        .send()
        .await
        .map_err(net_err)?;
    decode(response).await
}

pub async fn fetch_stats(token: &str) -> Result<Stats, ApiError> {
    let response = authorized(Request::get(&url("/todos/stats")), token)
        .send()
        .await
        .map_err(net_err)?;
    decode(response).await
}

pub async fn create_todo(token: &str, draft: &NewTodo) -> Result<Todo, ApiError> {
    let response = authorized(Request::post(&url("/todos")), token)
        .json(draft)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode(response).await
}

pub async fn update_todo(token: &str, id: u32, patch: &UpdateTodo) -> Result<Todo, ApiError> {
    let response = authorized(Request::put(&url(&format!("/todos/{id}"))), token)
        .json(patch)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    decode(response).await
}

pub async fn toggle_todo(token: &str, id: u32) -> Result<Todo, ApiError> {
    let response = authorized(Request::patch(&url(&format!("/todos/{id}/toggle"))), token)
        .send()
        .await
        .map_err(net_err)?;
    decode(response).await
}

pub async fn delete_todo(token: &str, id: u32) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&url(&format!("/todos/{id}"))), token)
        .send()
        .await
        .map_err(net_err)?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_from(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(message: Option<&str>, field: Option<(&str, &str)>) -> ApiError {
        ApiError::Server {
            status: 422,
            message: message.map(String::from),
            errors: field.map(|(k, v)| HashMap::from([(k.to_string(), v.to_string())])),
        }
    }

    #[test]
    fn test_display_prefers_server_message() {
        let err = server_error(Some("Email already taken"), None);
        assert_eq!(err.display("Registration failed"), "Email already taken");
    }

    #[test]
    fn test_display_falls_back_without_message() {
        let err = server_error(None, None);
        assert_eq!(err.display("Registration failed"), "Registration failed");
        assert_eq!(
            ApiError::Network("timeout".into()).display("Failed to fetch todos"),
            "Failed to fetch todos"
        );
    }

    #[test]
    fn test_field_error_lookup() {
        let err = server_error(None, Some(("email", "Email is invalid")));
        assert_eq!(err.field_error("email"), Some("Email is invalid"));
        assert_eq!(err.field_error("name"), None);
    }
}

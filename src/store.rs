//! Reactive Stores
//!
//! Global application state built on reactive_stores, provided to the
//! component tree via the Leptos context API.

pub mod auth;
pub mod local;
pub mod todos;

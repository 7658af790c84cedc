//! UI Components
//!
//! Leptos components for the two variants. Markup is semantic and
//! class-named only; styling is someone else's problem.

mod auth_panel;
mod error_notice;
mod filter_bar;
mod local_panel;
mod new_todo_form;
mod remote_panel;
mod stats_bar;
mod todo_list;

pub use auth_panel::AuthPanel;
pub use error_notice::ErrorNotice;
pub use filter_bar::FilterBar;
pub use local_panel::LocalPanel;
pub use new_todo_form::NewTodoForm;
pub use remote_panel::RemotePanel;
pub use stats_bar::StatsBar;
pub use todo_list::TodoList;

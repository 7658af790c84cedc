//! Domain Models
//!
//! Data structures shared by the local and remote todo stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
    /// Absent in the local variant; drives overdue accounting in the remote one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Todo {
    /// Overdue means an uncompleted todo whose due date has passed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }
}

/// Authenticated user profile (matches the auth API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Response body of the login and signup endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Login state as an explicit two-state machine
///
/// `user` and `token` only exist together, so the inconsistent
/// half-logged-in shapes are unrepresentable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user: User, token: String },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// Todo counts by status for summary display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub overdue: u32,
}

impl Stats {
    /// The aggregate as a pure function of the sequence.
    ///
    /// Recomputed after every local mutation instead of patched with
    /// per-operation increments, so `total == completed + pending` holds
    /// by construction.
    pub fn of(todos: &[Todo], now: DateTime<Utc>) -> Self {
        let completed = todos.iter().filter(|t| t.completed).count() as u32;
        let overdue = todos.iter().filter(|t| t.is_overdue(now)).count() as u32;
        Self {
            total: todos.len() as u32,
            completed,
            pending: todos.len() as u32 - completed,
            overdue,
        }
    }
}

/// UI-selected subset of the todo sequence. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

/// Pure filter over the full sequence, recomputed on read
pub fn filter_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Payload for creating a todo
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Payload for replacing a todo's editable fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn todo(id: u32, completed: bool, due_offset: Option<i64>) -> Todo {
        Todo {
            id,
            text: format!("Todo {}", id),
            completed,
            due_date: due_offset.map(|hours| Utc::now() + Duration::hours(hours)),
        }
    }

    #[test]
    fn test_stats_invariant() {
        let todos = vec![
            todo(1, false, None),
            todo(2, true, Some(-2)),
            todo(3, false, Some(-1)),
            todo(4, false, Some(5)),
        ];
        let stats = Stats::of(&todos, Utc::now());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.total, stats.completed + stats.pending);
    }

    #[test]
    fn test_overdue_counts_only_pending() {
        let todos = vec![
            todo(1, false, Some(-1)), // overdue
            todo(2, true, Some(-1)),  // past due but completed
            todo(3, false, Some(1)),  // not yet due
            todo(4, false, None),     // no due date
        ];
        let stats = Stats::of(&todos, Utc::now());
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn test_toggle_twice_round_trips_stats() {
        let mut todos = vec![todo(1, false, Some(-3)), todo(2, true, None)];
        let now = Utc::now();
        let before = Stats::of(&todos, now);

        todos[0].completed = !todos[0].completed;
        let flipped = Stats::of(&todos, now);
        assert_eq!(flipped.completed, before.completed + 1);
        assert_eq!(flipped.pending, before.pending - 1);
        assert_eq!(flipped.overdue, before.overdue - 1);

        todos[0].completed = !todos[0].completed;
        assert_eq!(Stats::of(&todos, now), before);
    }

    #[test]
    fn test_delete_decrements_exactly_one_bucket() {
        let todos = vec![todo(1, false, None), todo(2, true, None), todo(3, false, None)];
        let now = Utc::now();
        let before = Stats::of(&todos, now);

        let remaining: Vec<Todo> = todos.iter().filter(|t| t.id != 2).cloned().collect();
        let after = Stats::of(&remaining, now);
        assert_eq!(after.total, before.total - 1);
        assert_eq!(after.completed, before.completed - 1);
        assert_eq!(after.pending, before.pending);
    }

    #[test]
    fn test_filter_completed_returns_exact_subset() {
        let todos = vec![todo(1, true, None), todo(2, false, None), todo(3, true, None)];
        let completed = filter_todos(&todos, Filter::Completed);
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|t| t.completed));

        let active = filter_todos(&todos, Filter::Active);
        assert_eq!(active.len(), 1);
        assert!(active.iter().all(|t| !t.completed));

        assert_eq!(filter_todos(&todos, Filter::All).len(), 3);
    }

    #[test]
    fn test_todo_wire_names_are_camel_case() {
        let json = serde_json::to_string(&todo(1, false, Some(1))).unwrap();
        assert!(json.contains("\"dueDate\""));

        let parsed: Todo = serde_json::from_str(r#"{"id":7,"text":"x","completed":true}"#).unwrap();
        assert_eq!(parsed.id, 7);
        assert!(parsed.due_date.is_none());
    }

    #[test]
    fn test_session_accessors() {
        let anon = Session::Anonymous;
        assert!(!anon.is_authenticated());
        assert!(anon.token().is_none());

        let session = Session::Authenticated {
            user: User { id: 1, name: "Ada".into(), email: "ada@example.com".into() },
            token: "tok".into(),
        };
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Ada"));
    }
}

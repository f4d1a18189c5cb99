//! Wire types for the todo API.
//!
//! Field names follow the JSON the browser client already speaks
//! (`createdAt`, `{todos, count, hostname}`), so every struct here is
//! serialized in camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/todos`. `title` is optional here so that a missing
/// title reaches the handler and is reported as "Title is required"
/// instead of a generic JSON rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
}

/// Body of `PUT /api/todos/{id}`. Only the fields present are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub count: usize,
    pub hostname: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Shared shape of `/health` and `/ready`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub hostname: String,
    pub platform: String,
    pub version: String,
    pub environment: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_created_at_in_camel_case() {
        let todo = Todo {
            id: 7,
            title: "Test".to_string(),
            completed: false,
            created_at: DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-05-01T10:00:00"));
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn create_todo_tolerates_missing_title() {
        let input: CreateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn create_todo_rejects_non_string_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn update_todo_null_counts_as_absent() {
        let input: UpdateTodo = serde_json::from_str(r#"{"title":null,"completed":true}"#).unwrap();
        assert!(input.title.is_none());
        assert_eq!(input.completed, Some(true));
    }
}

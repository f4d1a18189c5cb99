//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateTodo, DeleteConfirmation, ErrorBody, ServerInfo, Todo, TodoList, UpdateTodo,
};

/// Synchronous, stateless client for the todo API.
///
/// An empty `base_url` produces root-relative paths (`/api/todos`), which
/// is what a same-origin host wants.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn todos_path(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_path(&self, id: u64) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.todos_path())
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.todo_path(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Post, self.todos_path(), body))
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Put, self.todo_path(id), body))
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.todo_path(id))
    }

    pub fn build_server_info(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}/api/info", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<TodoList, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<DeleteConfirmation, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_server_info(&self, response: HttpResponse) -> Result<ServerInfo, ApiError> {
        parse_json(response, 200)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|b| b.error)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::BadRequest(message))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODO_JSON: &str =
        r#"{"id":4,"title":"New","completed":false,"createdAt":"2024-05-01T10:00:00.000Z"}"#;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3001")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3001/api/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_uses_numeric_id() {
        let req = client().build_get_todo(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3001/api/todos/42");
    }

    #[test]
    fn build_create_todo_sends_title_only() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3001/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk"}));
    }

    #[test]
    fn build_update_todo_omits_absent_fields() {
        let input = UpdateTodo {
            completed: Some(true),
            ..UpdateTodo::default()
        };
        let req = client().build_update_todo(3, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3001/api/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"completed": true}));
    }

    #[test]
    fn build_delete_and_info_requests() {
        let req = client().build_delete_todo(2);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
        assert_eq!(
            client().build_server_info().path,
            "http://localhost:3001/api/info"
        );
    }

    #[test]
    fn empty_base_url_yields_relative_paths() {
        let client = TodoClient::new("");
        assert_eq!(client.build_list_todos().path, "/api/todos");
        assert_eq!(client.build_server_info().path, "/api/info");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3001/");
        assert_eq!(client.build_list_todos().path, "http://localhost:3001/api/todos");
    }

    #[test]
    fn parse_list_todos_reads_envelope() {
        let body = format!(r#"{{"todos":[{TODO_JSON}],"count":1,"hostname":"pod-a"}}"#);
        let list = client().parse_list_todos(HttpResponse::new(200, body)).unwrap();
        assert_eq!(list.count, 1);
        assert_eq!(list.hostname, "pod-a");
        assert_eq!(list.todos[0].id, 4);
    }

    #[test]
    fn parse_create_todo_requires_201() {
        let todo = client()
            .parse_create_todo(HttpResponse::new(201, TODO_JSON))
            .unwrap();
        assert_eq!(todo.title, "New");

        let err = client()
            .parse_create_todo(HttpResponse::new(200, TODO_JSON))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 200, .. }));
    }

    #[test]
    fn parse_create_todo_bad_request_carries_server_message() {
        let err = client()
            .parse_create_todo(HttpResponse::new(400, r#"{"error":"Title is required"}"#))
            .unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Title is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client()
            .parse_get_todo(HttpResponse::new(404, r#"{"error":"Todo not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_todo_reads_message() {
        let confirmation = client()
            .parse_delete_todo(HttpResponse::new(200, r#"{"message":"Todo deleted successfully"}"#))
            .unwrap();
        assert_eq!(confirmation.message, "Todo deleted successfully");
    }

    #[test]
    fn parse_server_info_success() {
        let body = r#"{"hostname":"pod-a","platform":"linux","version":"1.0.0","environment":"development","uptime":12.5,"timestamp":"2024-05-01T10:00:00.000Z"}"#;
        let info = client().parse_server_info(HttpResponse::new(200, body)).unwrap();
        assert_eq!(info.hostname, "pod-a");
        assert_eq!(info.uptime, 12.5);
    }

    #[test]
    fn parse_wrong_status_and_bad_json() {
        let err = client()
            .parse_update_todo(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));

        let err = client()
            .parse_list_todos(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}

//! Client-side view of the todo list.
//!
//! `TodoApp` keeps a local copy of the collection plus load/error status and
//! reconciles it from server responses. Every mutation trusts the record the
//! server sends back; nothing is flipped locally ahead of the response.
//!
//! Failures are logged and reduced to one generic message per operation.
//! There is no retry and nothing to roll back, since local state is only
//! touched after a successful response.

use std::fmt::Write as _;

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::{ApiError, ClientError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateTodo, ServerInfo, Todo, UpdateTodo};

pub const FETCH_FAILED: &str = "Failed to fetch todos. Please try again.";
pub const ADD_FAILED: &str = "Failed to add todo. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update todo. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete todo. Please try again.";

/// Performs one HTTP round-trip on behalf of the core.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

#[derive(Debug)]
pub struct TodoApp {
    client: TodoClient,
    todos: Vec<Todo>,
    server_info: Option<ServerInfo>,
    loading: bool,
    error: Option<String>,
}

fn round_trip<T, R>(
    transport: &mut T,
    request: HttpRequest,
    parse: impl FnOnce(HttpResponse) -> Result<R, ApiError>,
) -> Result<R, ClientError>
where
    T: Transport + ?Sized,
{
    let response = transport.execute(request)?;
    Ok(parse(response)?)
}

impl TodoApp {
    /// A fresh view starts out loading, with nothing fetched yet.
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
            server_info: None,
            loading: true,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn server_info(&self) -> Option<&ServerInfo> {
        self.server_info.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn stats(&self) -> TodoStats {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        TodoStats {
            total: self.todos.len(),
            completed,
            remaining: self.todos.len() - completed,
        }
    }

    /// Fetch the list and the server identity. The two are independent: a
    /// failed identity fetch is only logged.
    pub fn load<T: Transport + ?Sized>(&mut self, transport: &mut T) {
        self.fetch_todos(transport);
        self.fetch_server_info(transport);
    }

    pub fn fetch_todos<T: Transport + ?Sized>(&mut self, transport: &mut T) {
        self.loading = true;
        let client = &self.client;
        match round_trip(transport, client.build_list_todos(), |r| {
            client.parse_list_todos(r)
        }) {
            Ok(list) => {
                debug!(count = list.count, hostname = %list.hostname, "fetched todos");
                self.todos = list.todos;
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch todos");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    pub fn fetch_server_info<T: Transport + ?Sized>(&mut self, transport: &mut T) {
        let client = &self.client;
        match round_trip(transport, client.build_server_info(), |r| {
            client.parse_server_info(r)
        }) {
            Ok(info) => self.server_info = Some(info),
            Err(err) => warn!(error = %err, "failed to fetch server info"),
        }
    }

    /// Create a todo. Blank titles are ignored without a request.
    pub fn add<T: Transport + ?Sized>(&mut self, transport: &mut T, title: &str) {
        if title.trim().is_empty() {
            return;
        }
        let client = &self.client;
        let input = CreateTodo {
            title: title.to_string(),
        };
        let result = client
            .build_create_todo(&input)
            .map_err(ClientError::from)
            .and_then(|req| round_trip(transport, req, |r| client.parse_create_todo(r)));
        match result {
            Ok(todo) => self.todos.push(todo),
            Err(err) => {
                warn!(error = %err, "failed to add todo");
                self.error = Some(ADD_FAILED.to_string());
            }
        }
    }

    /// Flip `completed` on the server and adopt whatever record it returns.
    /// Ids not in the local list are ignored.
    pub fn toggle<T: Transport + ?Sized>(&mut self, transport: &mut T, id: u64) {
        let Some(current) = self.todos.iter().find(|t| t.id == id) else {
            return;
        };
        let patch = UpdateTodo {
            completed: Some(!current.completed),
            ..UpdateTodo::default()
        };
        let client = &self.client;
        let result = client
            .build_update_todo(id, &patch)
            .map_err(ClientError::from)
            .and_then(|req| round_trip(transport, req, |r| client.parse_update_todo(r)));
        match result {
            Ok(updated) => {
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(err) => {
                warn!(id, error = %err, "failed to update todo");
                self.error = Some(UPDATE_FAILED.to_string());
            }
        }
    }

    pub fn delete<T: Transport + ?Sized>(&mut self, transport: &mut T, id: u64) {
        let client = &self.client;
        match round_trip(transport, client.build_delete_todo(id), |r| {
            client.parse_delete_todo(r)
        }) {
            Ok(_) => self.todos.retain(|t| t.id != id),
            Err(err) => {
                warn!(id, error = %err, "failed to delete todo");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Plain-text rendering of the current view.
    pub fn render(&self) -> String {
        if self.loading {
            return "Loading...\n".to_string();
        }

        let mut out = String::new();
        if let Some(info) = &self.server_info {
            let _ = writeln!(
                out,
                "Server: {} | {} | v{} | {}",
                info.hostname, info.environment, info.version, info.platform
            );
            out.push('\n');
        }
        if let Some(error) = &self.error {
            let _ = writeln!(out, "Error: {error}");
        }

        if self.todos.is_empty() {
            out.push_str("No todos yet. Add one above!\n");
            return out;
        }

        for todo in &self.todos {
            let mark = if todo.completed { 'x' } else { ' ' };
            let _ = writeln!(
                out,
                "[{mark}] {:>3}  {}  ({})",
                todo.id,
                todo.title,
                todo.created_at.format("%Y-%m-%d")
            );
        }
        let stats = self.stats();
        let _ = writeln!(
            out,
            "\n{} total | {} completed | {} remaining",
            stats.total, stats.completed, stats.remaining
        );
        out
    }
}

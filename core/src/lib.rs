//! Synchronous API client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). [`TodoApp`] layers the
//! client's view of the list on top, delegating each round-trip to a host
//! supplied [`Transport`].
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use app::{TodoApp, TodoStats, Transport};
pub use client::TodoClient;
pub use error::{ApiError, ClientError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, DeleteConfirmation, ServerInfo, Todo, TodoList, UpdateTodo};

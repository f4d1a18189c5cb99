//! Request handlers and the state they share.

use std::{sync::Arc, time::Instant};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;
use crate::extract::JsonOrEmpty;
use crate::store::{SharedStore, TodoStore};
use crate::types::{
    CreateTodo, DeleteResponse, InfoResponse, ProbeResponse, Todo, TodoList, UpdateTodo,
};

/// Facts about this process that `/api/info` and the list endpoint report.
#[derive(Debug)]
pub struct ServerIdentity {
    pub hostname: String,
    pub version: String,
    pub environment: String,
    started_at: Instant,
}

impl ServerIdentity {
    pub fn new(hostname: String, version: String, environment: String) -> Self {
        Self {
            hostname,
            version,
            environment,
            started_at: Instant::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            local_hostname(),
            config.app_version.clone(),
            config.environment.clone(),
        )
    }

    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

fn local_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Router state. Cloned per request; both fields are reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub identity: Arc<ServerIdentity>,
}

impl AppState {
    pub fn new(store: TodoStore, identity: ServerIdentity) -> Self {
        Self {
            store: store.into_shared(),
            identity: Arc::new(identity),
        }
    }
}

impl Default for AppState {
    /// Seeded store, identity from default configuration.
    fn default() -> Self {
        Self::new(
            TodoStore::seeded(),
            ServerIdentity::from_config(&Config::default()),
        )
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A non-numeric id can never match a record, so it is reported the same
/// way as an unknown one.
fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse().map_err(|_| {
        debug!(id = raw, "unparseable todo id");
        AppError::NotFound
    })
}

pub async fn health() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "healthy".to_string(),
        timestamp: timestamp(),
    })
}

pub async fn ready() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ready".to_string(),
        timestamp: timestamp(),
    })
}

pub async fn server_info(State(state): State<AppState>) -> Json<InfoResponse> {
    let identity = &state.identity;
    Json(InfoResponse {
        hostname: identity.hostname.clone(),
        platform: std::env::consts::OS.to_string(),
        version: identity.version.clone(),
        environment: identity.environment.clone(),
        uptime: identity.uptime_secs(),
        timestamp: timestamp(),
    })
}

pub async fn list_todos(State(state): State<AppState>) -> Json<TodoList> {
    let store = state.store.read().await;
    Json(TodoList {
        todos: store.list().to_vec(),
        count: store.len(),
        hostname: state.identity.hostname.clone(),
    })
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id)?;
    let store = state.store.read().await;
    store.get(id).cloned().map(Json).ok_or_else(|| {
        debug!(id, "todo not found");
        AppError::NotFound
    })
}

pub async fn create_todo(
    State(state): State<AppState>,
    JsonOrEmpty(input): JsonOrEmpty<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let title = input.title.unwrap_or_default();
    let todo = state.store.write().await.create(title, Utc::now())?;
    info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// An unknown id is reported before the body is looked at.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<JsonOrEmpty<UpdateTodo>, AppError>,
) -> Result<Json<Todo>, AppError> {
    let id = parse_id(&id)?;
    let mut store = state.store.write().await;
    if store.get(id).is_none() {
        debug!(id, "update of unknown todo");
        return Err(AppError::NotFound);
    }
    let JsonOrEmpty(patch) = payload?;
    let todo = store.update(id, patch)?;
    info!(id, completed = todo.completed, "todo updated");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id)?;
    state.store.write().await.delete(id).inspect_err(|_| {
        debug!(id, "delete of unknown todo");
    })?;
    info!(id, "todo deleted");
    Ok(Json(DeleteResponse {
        message: "Todo deleted successfully".to_string(),
    }))
}

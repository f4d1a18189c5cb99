//! In-memory todo API.
//!
//! [`app`] builds the router over an injected [`AppState`]; [`run`] serves
//! it until Ctrl+C or SIGTERM.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod store;
pub mod types;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use config::Config;
pub use error::AppError;
pub use handlers::{AppState, ServerIdentity};
pub use store::{SharedStore, StoreError, TodoStore};
pub use types::{Todo, TodoList};

use handlers::{
    create_todo, delete_todo, get_todo, health, list_todos, ready, server_info, update_todo,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/api/info", get(server_info))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}

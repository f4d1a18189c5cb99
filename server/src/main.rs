use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use todo_server::{AppState, Config, ServerIdentity, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    let filter = EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "server listening");
    info!(
        environment = %config.environment,
        version = %config.app_version,
        node_env = config.node_env.as_deref().unwrap_or("unset"),
        "configuration loaded"
    );

    let state = AppState::new(TodoStore::seeded(), ServerIdentity::from_config(&config));
    todo_server::run(listener, state).await?;
    info!("server stopped");
    Ok(())
}

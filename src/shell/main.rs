use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use students::modules::students::adapters::outbound::in_memory_registry::InMemoryStudentRegistry;
use students::shell::config::{AppConfig, load_dotenv};
use students::shell::http::router;
use students::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_error = load_dotenv();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Some(error) = dotenv_error {
        tracing::warn!(%error, "ignoring unreadable .env file");
    }

    let config = AppConfig::from_env()?;

    // Lives as long as the server; dropped, and so reset, on restart.
    let registry = Arc::new(InMemoryStudentRegistry::new());
    let state = AppState::new(config.base_path.as_str(), registry);

    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "Students resource: http://{}{}",
        listener.local_addr()?,
        config.base_path
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(error) => {
            tracing::error!(%error, "cannot listen for the shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

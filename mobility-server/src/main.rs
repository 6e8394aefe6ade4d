use std::sync::Arc;

use clap::Parser;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mobility_server::config::{Cli, ServerConfig};
use mobility_server::routes;
use mobility_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::resolve(&cli)?;
    info!(?config, "starting mobility server");

    let state = Arc::new(AppState::new(&config));
    let mut app = routes::router(state);
    if let Some(static_dir) = &config.static_dir {
        app = app.nest_service("/map", ServeDir::new(static_dir));
    }

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
    }
}

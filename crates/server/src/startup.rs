use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use service::{dog::DogService, runtime};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host from config; port 3000, or `test_port` (3001) when `APP_ENV=test`.
pub fn bind_addr(server: &ServerConfig, test_mode: bool) -> Result<SocketAddr, StartupError> {
    let port = server.bind_port(test_mode);
    format!("{}:{}", server.host, port)
        .parse()
        .map_err(|e| {
            StartupError::InvalidConfig(format!("bad bind address {}:{}: {}", server.host, port, e))
        })
}

/// Build the router around an already constructed service.
pub fn build_app(dogs: DogService) -> Router {
    routes::build_router(ServerState::new(dogs), build_cors())
}

/// Public entry: load configuration, connect the store and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_env()?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let store = runtime::build_store(&cfg.database).await?;
    let app = build_app(DogService::new(store));

    let test_mode = common::env::is_test_mode();
    let addr = bind_addr(&cfg.server, test_mode)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;

    info!(%addr, env = common::env::app_env().as_str(), "Server ready at: http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

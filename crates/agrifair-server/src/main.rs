//! Binary entrypoint for the agri fair price HTTP server.
//!
//! Reads configuration from environment variables:
//! - `AGRIFAIR_HOST`: bind address (default: "0.0.0.0")
//! - `AGRIFAIR_PORT`: listen port (default: "8000")
//! - `RUST_LOG`: log filter (default: "info")

use agrifair_server::config::ServerConfig;
use agrifair_server::error::StartupError;
use agrifair_server::router::build_router;
use agrifair_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let app = build_router(AppState::default());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("agrifair server listening on {}", addr);

    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

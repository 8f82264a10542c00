use std::net::SocketAddr;

use tracing::{error, info};

use campus_paths_service::{app, ServiceConfig};
use campus_paths_service_shared::{init_logging, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("campus-paths");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env();
    info!(port = config.port, data_dir = ?config.data_dir, "starting campus paths service");

    let state = AppState::load(config.data_dir.as_deref()).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    info!(
        buildings = state.map().building_count(),
        data_dir = ?state.data_dir(),
        "application state loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

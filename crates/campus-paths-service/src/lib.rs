//! Campus shortest-path HTTP service.
//!
//! # Endpoints
//!
//! - `GET /` - greeting
//! - `GET|POST /path?start=..&end=..` - shortest route between two buildings
//! - `GET|POST /buildings` - every building on the map
//! - `GET /health/live` - liveness probe
//! - `GET /health/ready` - readiness probe
//!
//! # Configuration
//!
//! - `CAMPUS_PATHS_DATA_DIR` - directory holding the dataset TSV files
//! - `SERVICE_PORT` - HTTP port (default: 4567)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - `json` (default) or `text`

#![deny(warnings)]

pub mod config;
mod handlers;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use campus_paths_service_shared::{health_live, health_ready, AppState, RequestIdLayer};

pub use config::ServiceConfig;

/// Build the service router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/path", get(handlers::path).post(handlers::path))
        .route("/buildings", get(handlers::buildings).post(handlers::buildings))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestIdLayer)
        .with_state(state)
}

//! Liveness and readiness handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Body of the health endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `ok`, or `not_ready: <reason>`.
    pub status: String,

    pub service: String,

    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings_loaded: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_routes: Option<usize>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            buildings_loaded: None,
            cached_routes: None,
        }
    }

    pub fn ready(service: &str, version: &str, buildings: usize, cached_routes: usize) -> Self {
        Self {
            buildings_loaded: Some(buildings),
            cached_routes: Some(cached_routes),
            ..Self::alive(service, version)
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            ..Self::alive(service, version)
        }
    }
}

/// `GET /health/live`
///
/// ```text
/// {"status":"ok","service":"campus-paths-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// `GET /health/ready`
///
/// Ready once at least one building is loaded; 503 otherwise.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let map = state.map();
    let buildings = map.building_count();

    if buildings == 0 {
        let status = HealthStatus::not_ready(service, version, "no buildings loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, buildings, map.cached_routes());
    (StatusCode::OK, Json(status)).into_response()
}

//! RFC 9457 Problem Details for HTTP APIs.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use campus_paths_lib::Error as LibError;

/// Problem type URI for malformed or missing query parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for building names that are not on the map.
pub const PROBLEM_UNKNOWN_BUILDING: &str = "/problems/unknown-building";

/// Problem type URI for a route query that names neither building.
pub const PROBLEM_MISSING_BUILDINGS: &str = "/problems/missing-buildings";

/// Problem type URI for lookups of entities that do not exist.
pub const PROBLEM_NOT_FOUND: &str = "/problems/not-found";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// Problem type URI for a service whose dataset is unavailable.
pub const PROBLEM_SERVICE_UNAVAILABLE: &str = "/problems/service-unavailable";

/// RFC 9457 Problem Details response body.
///
/// ```
/// use campus_paths_service_shared::{ProblemDetails, PROBLEM_UNKNOWN_BUILDING};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_UNKNOWN_BUILDING,
///     "Unknown Building",
///     StatusCode::BAD_REQUEST,
/// )
/// .with_detail("Building 'CSF' not found. Did you mean: CSE?")
/// .with_request_id("req-12345");
/// assert_eq!(problem.status, 400);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,

    pub title: String,

    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Request ID of the failing call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// 400 for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_INVALID_REQUEST, "Invalid Request", StatusCode::BAD_REQUEST)
            .with_detail(detail)
            .with_request_id(request_id)
    }

    /// 400 for a building name that is not on the map.
    pub fn unknown_building(
        name: &str,
        suggestions: &[String],
        request_id: impl Into<String>,
    ) -> Self {
        let detail = if suggestions.is_empty() {
            format!("Building '{name}' not found")
        } else {
            format!(
                "Building '{name}' not found. Did you mean: {}?",
                suggestions.join(", ")
            )
        };

        Self::new(
            PROBLEM_UNKNOWN_BUILDING,
            "Unknown Building",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 418 for a route query with both building names missing.
    pub fn missing_buildings(request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_MISSING_BUILDINGS,
            "Missing Buildings",
            StatusCode::IM_A_TEAPOT,
        )
        .with_detail("Both 'start' and 'end' are required")
        .with_request_id(request_id)
    }

    /// 404 for a lookup that matched nothing.
    pub fn not_found(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_NOT_FOUND, "Not Found", StatusCode::NOT_FOUND)
            .with_detail(detail)
            .with_request_id(request_id)
    }

    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    pub fn service_unavailable(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_SERVICE_UNAVAILABLE,
            "Service Unavailable",
            StatusCode::SERVICE_UNAVAILABLE,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.detail.as_deref().unwrap_or(""))
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );
        *response.status_mut() = status;
        response
    }
}

/// Convert a library error to a problem.
///
/// Caller mistakes become 400, missing lookups 404, and everything else 5xx.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownBuilding { name, suggestions } => {
            ProblemDetails::unknown_building(name, suggestions, request_id)
        }
        LibError::BuildingNotFound { .. } => {
            ProblemDetails::not_found(error.to_string(), request_id)
        }
        LibError::DatasetNotFound { path } => ProblemDetails::service_unavailable(
            format!("Dataset not available at {}", path.display()),
            request_id,
        ),
        other if other.is_invalid_argument() => {
            ProblemDetails::bad_request(other.to_string(), request_id)
        }
        other => ProblemDetails::internal_error(other.to_string(), request_id),
    }
}

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;
use tracing::{info, warn};

use campus_paths_lib::{BuildingsResponse, PathResponse};
use campus_paths_service_shared::{
    from_lib_error, AppState, PathQuery, ProblemDetails, RequestId, ServiceResponse, Validate,
};

/// Either a payload or an RFC 9457 problem.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum ApiResponse<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiResponse::Success(data) => data.into_response(),
            ApiResponse::Error(problem) => problem.into_response(),
        }
    }
}

pub(crate) async fn hello() -> &'static str {
    "Hello World!"
}

/// `GET|POST /path?start=..&end=..`
pub(crate) async fn path(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(query): Query<PathQuery>,
) -> ApiResponse<PathResponse> {
    if let Err(problem) = query.validate(request_id.as_str()) {
        warn!(
            request_id = %request_id,
            status = problem.status,
            "rejected path query"
        );
        return ApiResponse::Error(*problem);
    }

    let map = state.map();
    match map.find_shortest_path(&query.start, &query.end) {
        Ok(path) => {
            let response = PathResponse::from_path(&query.start, &query.end, path.as_ref());
            info!(
                request_id = %request_id,
                start = %query.start,
                end = %query.end,
                found = !response.is_no_path(),
                cost = response.cost,
                "path computed"
            );
            ApiResponse::Success(ServiceResponse::new(response))
        }
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "path query failed");
            ApiResponse::Error(from_lib_error(&err, request_id.as_str()))
        }
    }
}

/// `GET|POST /buildings`
pub(crate) async fn buildings(State(state): State<AppState>) -> ServiceResponse<BuildingsResponse> {
    ServiceResponse::new(BuildingsResponse::from_map(state.map()))
}

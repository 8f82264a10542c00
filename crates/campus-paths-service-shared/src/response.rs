//! Wrapper for successful HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Successful JSON body.
///
/// The payload is flattened into the top-level object, so a wrapped
/// `PathResponse` serializes exactly like the bare value.
///
/// ```
/// use campus_paths_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Count {
///     buildings: usize,
/// }
///
/// let response = ServiceResponse::new(Count { buildings: 5 });
/// assert_eq!(
///     serde_json::to_string(&response).unwrap(),
///     r#"{"buildings":5}"#
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    #[serde(flatten)]
    pub data: T,

    #[serde(skip)]
    status: Option<u16>,
}

impl<T> ServiceResponse<T> {
    /// 200 OK response.
    pub fn new(data: T) -> Self {
        Self { data, status: None }
    }

    /// Response with a non-default status code.
    pub fn with_status(data: T, status: StatusCode) -> Self {
        Self {
            data,
            status: Some(status.as_u16()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK)
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

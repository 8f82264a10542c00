//! Query types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation for request types.
pub trait Validate {
    /// Validate the request. `request_id` fills the `instance` field of any
    /// returned problem.
    ///
    /// The problem is boxed to keep the `Err` variant small.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Query string of a route request: `?start=CSE&end=MGH`.
///
/// Missing parameters deserialize as empty strings so that validation, not
/// extraction, decides the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub start: String,

    #[serde(default)]
    pub end: String,
}

impl Validate for PathQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        match (self.start.trim().is_empty(), self.end.trim().is_empty()) {
            (true, true) => Err(Box::new(ProblemDetails::missing_buildings(request_id))),
            (true, false) => Err(Box::new(ProblemDetails::bad_request(
                "The 'start' parameter is required and cannot be empty",
                request_id,
            ))),
            (false, true) => Err(Box::new(ProblemDetails::bad_request(
                "The 'end' parameter is required and cannot be empty",
                request_id,
            ))),
            (false, false) => Ok(()),
        }
    }
}

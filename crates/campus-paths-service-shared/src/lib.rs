//! Shared infrastructure for the campus paths HTTP service.
//!
//! - [`AppState`]: the campus map, loaded once and shared by every handler
//! - [`health`]: liveness and readiness handlers
//! - [`ProblemDetails`]: RFC 9457 error bodies
//! - [`ServiceResponse`]: wrapper for successful JSON bodies
//! - [`logging`]: JSON or text tracing setup
//! - [`middleware`]: request ID propagation
//! - Query types with validation
//!
//! Handlers stay thin: they validate input, call `campus-paths-lib`, and shape
//! the result. No routing logic lives here.
//!
//! # Testing Support
//!
//! The [`test_utils`] module exposes a fixture-backed [`AppState`]. Enable the
//! `test-utils` feature to use it from dependent crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId, RequestIdLayer, REQUEST_ID_HEADER};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_MISSING_BUILDINGS, PROBLEM_NOT_FOUND, PROBLEM_SERVICE_UNAVAILABLE,
    PROBLEM_UNKNOWN_BUILDING,
};
pub use request::{PathQuery, Validate};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};

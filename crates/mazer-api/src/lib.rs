//! **mazer-api**: request/response layer over the maze generator and
//! solvers.
//!
//! Provides the JSON bodies clients exchange ([`messages`]), the error type
//! every request can fail with ([`ApiError`]), and [`MazeService`], which
//! turns raw request bodies into status-plus-JSON replies.

pub mod error;
pub mod messages;
pub mod service;

pub use error::ApiError;
pub use messages::{ErrorBody, GenerateRequest, GenerateResponse, HealthResponse, SolveRequest};
pub use service::{MazeService, Reply};

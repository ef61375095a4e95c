//! Transport-agnostic request handling.
//!
//! [`MazeService`] validates requests, calls the generator and solvers, and
//! turns the outcome into a [`Reply`]: a status code plus a JSON body. An
//! HTTP server only has to route a path to the matching `handle_*` method
//! and copy the reply out.

use mazer_core::Grid;
use mazer_gen::GenParams;
use mazer_paths::{Algorithm, SearchResult};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::messages::{ErrorBody, GenerateRequest, GenerateResponse, HealthResponse, SolveRequest};

/// Status and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(&ApiError::Json(e)),
        }
    }

    fn error(err: &ApiError) -> Self {
        let body = ErrorBody {
            error: err.to_string(),
        };
        Self {
            status: err.status(),
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }

    fn from_result<T: Serialize>(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(body) => Self::ok(&body),
            Err(e) => {
                log::warn!("rejecting request: {e}");
                Self::error(&e)
            }
        }
    }

    /// Whether the request succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Stateless maze service. The only configuration is the set of defaults
/// applied to generate requests with missing fields.
#[derive(Debug, Clone, Default)]
pub struct MazeService {
    defaults: GenParams,
}

impl MazeService {
    /// A service filling missing generate fields from `defaults`.
    pub fn new(defaults: GenParams) -> Self {
        Self { defaults }
    }

    /// Generate a maze.
    pub fn generate(&self, req: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        let params = req.resolve(&self.defaults);
        let grid = params.generate()?;
        Ok(GenerateResponse::new(grid))
    }

    /// Solve a maze with the requested algorithm (BFS when absent or
    /// unrecognised).
    pub fn solve(&self, req: &SolveRequest) -> Result<SearchResult, ApiError> {
        let grid: &Grid = req.grid.as_ref().ok_or(ApiError::MissingField("grid"))?;
        let start = req.start.ok_or(ApiError::MissingField("start"))?;
        let end = req.end.ok_or(ApiError::MissingField("end"))?;
        let algorithm = req
            .algorithm
            .as_deref()
            .map(Algorithm::from_name)
            .unwrap_or_default();
        Ok(algorithm.solve(grid, start, end)?)
    }

    /// Liveness probe.
    pub fn health(&self) -> HealthResponse {
        HealthResponse::default()
    }

    /// Handle a raw generate body.
    ///
    /// An empty body, `null`, or a body that is not JSON at all means "use
    /// every default". A well-formed body with wrongly typed fields is a
    /// client error.
    pub fn handle_generate(&self, body: &str) -> Reply {
        let req = match serde_json::from_str::<Value>(body) {
            Ok(Value::Null) => Ok(GenerateRequest::default()),
            Ok(v) => serde_json::from_value(v).map_err(ApiError::from),
            Err(e) => {
                if !body.trim().is_empty() {
                    log::debug!("generate body is not JSON ({e}), using defaults");
                }
                Ok(GenerateRequest::default())
            }
        };
        Reply::from_result(req.and_then(|r| self.generate(&r)))
    }

    /// Handle a raw solve body. Unlike generate, the body must be JSON.
    pub fn handle_solve(&self, body: &str) -> Reply {
        let req = serde_json::from_str::<SolveRequest>(body).map_err(ApiError::from);
        Reply::from_result(req.and_then(|r| self.solve(&r)))
    }

    /// Handle a health probe.
    pub fn handle_health(&self) -> Reply {
        Reply::ok(&self.health())
    }
}

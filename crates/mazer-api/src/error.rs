use mazer_gen::GenError;
use mazer_paths::SolveError;
use thiserror::Error;

/// Everything a request can fail with. All of these are the client's
/// fault and map to HTTP-style status 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Generate(#[from] GenError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("invalid request body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid, start, end are required (missing {0})")]
    MissingField(&'static str),
}

impl ApiError {
    /// Status code reported with this error.
    pub fn status(&self) -> u16 {
        400
    }
}

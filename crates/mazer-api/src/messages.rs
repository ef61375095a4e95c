//! Request and response bodies exchanged with clients.
//!
//! Field names follow the wire format: `wallProbability` is camelCase,
//! `visited_order` (inside [`SearchResult`](mazer_paths::SearchResult)) is
//! snake_case.

use mazer_core::{Cell, Grid};
use mazer_gen::GenParams;
use serde::{Deserialize, Serialize};

/// Body of a generate request. Missing fields take the service defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl GenerateRequest {
    /// Fill missing fields from `defaults`.
    pub fn resolve(&self, defaults: &GenParams) -> GenParams {
        GenParams {
            rows: self.rows.unwrap_or(defaults.rows),
            cols: self.cols.unwrap_or(defaults.cols),
            wall_probability: self.wall_probability.unwrap_or(defaults.wall_probability),
            seed: self.seed.or(defaults.seed),
        }
    }
}

/// A generated maze and its conventional endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
}

impl GenerateResponse {
    /// Wrap `grid` with start `(0, 0)` and end `(rows - 1, cols - 1)`.
    pub fn new(grid: Grid) -> Self {
        let end = grid.bounds().last();
        Self {
            grid,
            start: Cell::ZERO,
            end,
        }
    }
}

/// Body of a solve request. `grid`, `start` and `end` are required; they
/// are optional here so that a missing one is reported by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub grid: Option<Grid>,
    #[serde(default)]
    pub start: Option<Cell>,
    #[serde(default)]
    pub end: Option<Cell>,
    /// `bfs` (default), `dfs`, or `a*`/`astar`/`a-star`; case-insensitive.
    /// Unknown names mean BFS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

/// Liveness probe body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body sent with every client error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generate_request_uses_camel_case() {
        let req: GenerateRequest =
            serde_json::from_value(json!({"rows": 5, "wallProbability": 0.1})).unwrap();
        assert_eq!(req.rows, Some(5));
        assert_eq!(req.cols, None);
        assert_eq!(req.wall_probability, Some(0.1));

        let p = req.resolve(&GenParams::default());
        assert_eq!((p.rows, p.cols, p.wall_probability, p.seed), (5, 20, 0.1, None));
    }

    #[test]
    fn generate_request_accepts_negative_seed() {
        let req: GenerateRequest = serde_json::from_value(json!({"seed": -5})).unwrap();
        assert_eq!(req.seed, Some(-5));
    }

    #[test]
    fn generate_response_shape() {
        let resp = GenerateResponse::new(Grid::new(2, 3));
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"grid": [[0, 0, 0], [0, 0, 0]], "start": [0, 0], "end": [1, 2]})
        );
    }

    #[test]
    fn solve_request_fields_are_optional_on_the_wire() {
        let req: SolveRequest = serde_json::from_value(json!({"start": [0, 0]})).unwrap();
        assert!(req.grid.is_none());
        assert_eq!(req.start, Some(Cell::ZERO));
        assert!(req.algorithm.is_none());
    }

    #[test]
    fn health_is_ok() {
        assert_eq!(
            serde_json::to_value(HealthResponse::default()).unwrap(),
            json!({"status": "ok"})
        );
    }
}

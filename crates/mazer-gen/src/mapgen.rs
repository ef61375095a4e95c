//! Random maze generation.
//!
//! Every cell independently becomes a wall with a fixed probability, then
//! the two conventional endpoints, `(0, 0)` and `(rows - 1, cols - 1)`, are
//! forced open. Nothing guarantees a path between them: a dense maze may be
//! disconnected, and solvers report that as "not found".

use mazer_core::{Bounds, Cell, Grid, Tile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Largest maze, in cells, that [`generate`] will build.
pub const MAX_CELLS: usize = 4_000_000;

/// Errors raised for invalid generation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// A maze needs room for distinct start and end cells.
    #[error("rows and cols must be > 1 (got {rows}x{cols})")]
    InvalidDimension { rows: i32, cols: i32 },
    /// More than [`MAX_CELLS`] cells.
    #[error("maze too large: {rows}x{cols} exceeds {MAX_CELLS} cells")]
    TooLarge { rows: i32, cols: i32 },
    /// The wall probability must lie in `[0.0, 1.0)`.
    #[error("wall_probability must be in [0.0, 1.0) (got {0})")]
    InvalidProbability(f64),
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows` x `cols` maze.
    ///
    /// One uniform draw in `[0, 1)` per cell, row-major; the cell is a wall
    /// when the draw is below `wall_probability`. The corners `(0, 0)` and
    /// `(rows - 1, cols - 1)` are then opened regardless of their draw.
    pub fn fill(&mut self, rows: i32, cols: i32, wall_probability: f64) -> Result<Grid, GenError> {
        validate(rows, cols, wall_probability)?;

        let grid = Grid::from_fn(rows, cols, |_| {
            let r: f64 = self.rng.random();
            if r < wall_probability {
                Tile::Wall
            } else {
                Tile::Open
            }
        });

        let last = Bounds::new(rows, cols).last();
        Ok(grid
            .with_tile(Cell::ZERO, Tile::Open)
            .with_tile(last, Tile::Open))
    }
}

fn validate(rows: i32, cols: i32, wall_probability: f64) -> Result<(), GenError> {
    if rows <= 1 || cols <= 1 {
        return Err(GenError::InvalidDimension { rows, cols });
    }
    let cells = (rows as usize).checked_mul(cols as usize);
    if cells.is_none_or(|n| n > MAX_CELLS) {
        return Err(GenError::TooLarge { rows, cols });
    }
    // Written so that NaN fails too.
    if !(0.0..1.0).contains(&wall_probability) {
        return Err(GenError::InvalidProbability(wall_probability));
    }
    Ok(())
}

/// Parameters for one generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenParams {
    pub rows: i32,
    pub cols: i32,
    pub wall_probability: f64,
    /// Fixed seed for a reproducible maze; `None` draws from OS entropy.
    /// Any integer is accepted, negative ones included.
    pub seed: Option<i64>,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            wall_probability: 0.3,
            seed: None,
        }
    }
}

impl GenParams {
    /// Generate the maze these parameters describe.
    pub fn generate(&self) -> Result<Grid, GenError> {
        generate(self.rows, self.cols, self.wall_probability, self.seed)
    }
}

/// Generate a maze. With `Some(seed)` the result is reproducible; with
/// `None` every call draws a fresh seed from the OS.
pub fn generate(
    rows: i32,
    cols: i32,
    wall_probability: f64,
    seed: Option<i64>,
) -> Result<Grid, GenError> {
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s as u64),
        None => StdRng::from_os_rng(),
    };
    let grid = MazeGen::new(rng).fill(rows, cols, wall_probability)?;
    log::debug!(
        "generated {}x{} maze: wall_probability={wall_probability} seed={seed:?} walls={}",
        grid.rows(),
        grid.cols(),
        grid.count(Tile::Wall)
    );
    Ok(grid)
}

//! Random maze generation for mazer.

pub mod mapgen;

pub use mapgen::{GenError, GenParams, MAX_CELLS, MazeGen, generate};

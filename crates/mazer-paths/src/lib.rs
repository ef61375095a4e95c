//! Maze solvers for 4-connected grids.
//!
//! This crate provides three search strategies sharing one contract:
//!
//! - **BFS** shortest path ([`bfs`])
//! - **DFS** any path ([`dfs`])
//! - **A\*** shortest path with the Manhattan heuristic ([`astar`])
//!
//! Each returns a [`SearchResult`] holding the path and the order in which
//! cells were finalized, for animation. All three run through one driver
//! and differ only in the frontier they plug into it. [`Algorithm`] picks a
//! strategy by name.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! [`mazer_core::Grid`] implements both.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod result;
mod search;
mod traits;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use result::{SearchResult, SolveError};
pub use traits::{AstarPather, Pather};

//! **mazer-core**: value types shared by the maze generator and solvers.
//!
//! This crate provides the [`Cell`] coordinate, the [`Tile`] occupancy
//! state, the immutable [`Grid`], and a plain-text renderer used to show
//! mazes and search results in a terminal.

pub mod geom;
pub mod grid;
pub mod render;
pub mod tile;

pub use geom::{Bounds, Cell, DIRECTIONS};
pub use grid::{Grid, GridError};
pub use render::{Overlay, render};
pub use tile::Tile;

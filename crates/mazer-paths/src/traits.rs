use mazer_core::{Bounds, Cell, Grid};

use crate::distance::manhattan;

/// Minimal search interface: a bounded area and the cells one can stand on.
pub trait Pather {
    /// The rectangle searches are confined to.
    fn bounds(&self) -> Bounds;

    /// Whether `c` is in bounds and traversable.
    fn passable(&self, c: Cell) -> bool;

    /// Append the passable 4-neighbours of `c` into `buf`, in
    /// [`DIRECTIONS`](mazer_core::DIRECTIONS) order. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

/// Pather with an admissible heuristic for A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn passable(&self, c: Cell) -> bool {
        self.is_open(c)
    }
}

impl AstarPather for Grid {}

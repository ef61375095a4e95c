use mazer_core::Cell;

use crate::frontier::Queue;
use crate::result::{SearchResult, SolveError};
use crate::search;
use crate::traits::Pather;

/// Find a shortest path from `start` to `end` with breadth-first search.
///
/// Cells are finalized in non-decreasing distance from `start`, so the
/// returned path has the minimum number of steps.
pub fn bfs<P: Pather>(pather: &P, start: Cell, end: Cell) -> Result<SearchResult, SolveError> {
    search::run(pather, Queue::new(pather.bounds().len()), start, end)
}

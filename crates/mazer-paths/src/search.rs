//! The search driver shared by every strategy.

use mazer_core::{Bounds, Cell};

use crate::frontier::Frontier;
use crate::result::{SearchResult, SolveError};
use crate::traits::Pather;

/// Sentinel for "no predecessor" in the parent array.
const NO_PARENT: usize = usize::MAX;

/// Run one search from `start` to `end` using `frontier`'s pop order.
///
/// Handles everything the strategies have in common: endpoint validation,
/// the wall short-circuit, `visited_order` bookkeeping, neighbour
/// enumeration and path reconstruction.
pub(crate) fn run<P: Pather, F: Frontier>(
    pather: &P,
    mut frontier: F,
    start: Cell,
    end: Cell,
) -> Result<SearchResult, SolveError> {
    let bounds = pather.bounds();
    let start_idx = checked_index(bounds, start)?;
    let goal_idx = checked_index(bounds, end)?;

    if !pather.passable(start) || !pather.passable(end) {
        return Ok(SearchResult::blocked());
    }

    let mut parent = vec![NO_PARENT; bounds.len()];
    let mut visited_order = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    frontier.seed(start_idx);

    while let Some(ci) = frontier.pop() {
        let current = bounds.cell(ci);
        visited_order.push(current);

        if ci == goal_idx {
            let path = reconstruct(bounds, &parent, goal_idx);
            return Ok(SearchResult::found(path, visited_order));
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if frontier.relax(ci, ni) {
                parent[ni] = ci;
            }
        }
    }

    Ok(SearchResult::not_found(visited_order))
}

fn checked_index(bounds: Bounds, c: Cell) -> Result<usize, SolveError> {
    bounds.index(c).ok_or(SolveError::OutOfBounds {
        cell: c,
        rows: bounds.rows,
        cols: bounds.cols,
    })
}

/// Walk predecessor links back from `goal` and return the path in
/// start-to-goal order. The start cell is the one with no parent.
fn reconstruct(bounds: Bounds, parent: &[usize], goal: usize) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        path.push(bounds.cell(ci));
        ci = parent[ci];
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::Queue;
    use mazer_core::{Grid, Tile};

    #[test]
    fn out_of_bounds_names_the_offending_cell() {
        let grid = Grid::new(3, 3);
        let q = Queue::new(grid.len());
        let err = run(&grid, q, Cell::new(0, 0), Cell::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            SolveError::OutOfBounds {
                cell: Cell::new(3, 0),
                rows: 3,
                cols: 3
            }
        );
    }

    #[test]
    fn out_of_bounds_wins_over_wall() {
        let grid = Grid::new(2, 2).with_tile(Cell::ZERO, Tile::Wall);
        let q = Queue::new(grid.len());
        assert!(run(&grid, q, Cell::ZERO, Cell::new(-1, 0)).is_err());
    }

    #[test]
    fn wall_endpoint_short_circuits() {
        let grid = Grid::new(2, 2).with_tile(Cell::new(1, 1), Tile::Wall);
        let q = Queue::new(grid.len());
        let r = run(&grid, q, Cell::ZERO, Cell::new(1, 1)).unwrap();
        assert_eq!(r, SearchResult::blocked());
    }

    #[test]
    fn start_equals_end() {
        let grid = Grid::new(2, 2);
        let q = Queue::new(grid.len());
        let r = run(&grid, q, Cell::new(1, 0), Cell::new(1, 0)).unwrap();
        assert!(r.found);
        assert_eq!(r.steps, 0);
        assert_eq!(r.path, vec![Cell::new(1, 0)]);
        assert_eq!(r.visited_order, vec![Cell::new(1, 0)]);
    }

    #[test]
    fn reconstruct_follows_parents() {
        let bounds = Bounds::new(1, 3);
        let parent = [NO_PARENT, 0, 1];
        assert_eq!(
            reconstruct(bounds, &parent, 2),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
    }
}

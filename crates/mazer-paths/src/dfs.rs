use mazer_core::Cell;

use crate::frontier::Stack;
use crate::result::{SearchResult, SolveError};
use crate::search;
use crate::traits::Pather;

/// Find some path from `start` to `end` with depth-first search.
///
/// Neighbours are pushed in direction order and popped in reverse, so the
/// last pushed branch is explored first. Cells are marked when pushed. The
/// path is not necessarily shortest.
pub fn dfs<P: Pather>(pather: &P, start: Cell, end: Cell) -> Result<SearchResult, SolveError> {
    search::run(pather, Stack::new(pather.bounds().len()), start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::{Grid, Tile};

    fn cells(v: &[(i32, i32)]) -> Vec<Cell> {
        v.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn open_3x3_goes_right_first() {
        let grid = Grid::new(3, 3);
        let r = dfs(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
        assert!(r.found);
        assert_eq!(r.steps, 4);
        assert_eq!(r.path, cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]));
        assert_eq!(r.visited_order, r.path);
    }

    #[test]
    fn longer_than_shortest() {
        // Target is two cells below the start, but DFS dives right first.
        let grid = Grid::new(3, 3);
        let r = dfs(&grid, Cell::new(0, 0), Cell::new(2, 0)).unwrap();
        assert!(r.found);
        assert_eq!(
            r.path,
            cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)])
        );
        assert_eq!(r.steps, 6);
    }

    #[test]
    fn keeps_first_discoverer_as_parent() {
        // (1, 0) is pushed by the start before the deep branch reaches it
        // from (2, 0), so its path stays one step long.
        let grid = Grid::new(3, 3);
        let r = dfs(&grid, Cell::new(0, 0), Cell::new(1, 0)).unwrap();
        assert_eq!(r.path, cells(&[(0, 0), (1, 0)]));
        assert_eq!(
            r.visited_order,
            cells(&[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2),
                (2, 1),
                (2, 0),
                (1, 1),
                (1, 0)
            ])
        );
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        let grid = Grid::from_rows(vec![
            vec![Tile::Open, Tile::Wall],
            vec![Tile::Wall, Tile::Open],
        ])
        .unwrap();
        let r = dfs(&grid, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.visited_order, vec![Cell::new(0, 0)]);
    }

    #[test]
    fn wall_end_returns_empty_result() {
        let grid = Grid::new(2, 2).with_tile(Cell::new(1, 1), Tile::Wall);
        let r = dfs(&grid, Cell::ZERO, Cell::new(1, 1)).unwrap();
        assert_eq!(r, SearchResult::blocked());
    }
}

use mazer_core::{Cell, Grid};
use thiserror::Error;

/// Outcome of a single search.
///
/// When `found` is false, `steps` is 0 and `path` is empty. `visited_order`
/// lists cells in the order the search finalized them; it is empty only
/// when an endpoint is a wall and no search ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    pub steps: usize,
    pub path: Vec<Cell>,
    pub visited_order: Vec<Cell>,
}

impl SearchResult {
    /// The result for a wall start or end: nothing searched, nothing found.
    pub fn blocked() -> Self {
        Self::default()
    }

    /// A failed search that finalized `visited_order`.
    pub fn not_found(visited_order: Vec<Cell>) -> Self {
        Self {
            visited_order,
            ..Self::default()
        }
    }

    /// A successful search. `path` runs start to end and is never empty.
    pub fn found(path: Vec<Cell>, visited_order: Vec<Cell>) -> Self {
        Self {
            found: true,
            steps: path.len().saturating_sub(1),
            path,
            visited_order,
        }
    }

    /// Check the path invariants against `grid`: a found path starts at
    /// `start`, ends at `end`, moves one orthogonal step at a time and only
    /// over open cells; a failed search has no path and zero steps.
    pub fn is_valid_for(&self, grid: &Grid, start: Cell, end: Cell) -> bool {
        if !self.found {
            return self.steps == 0 && self.path.is_empty();
        }
        let (Some(&first), Some(&last)) = (self.path.first(), self.path.last()) else {
            return false;
        };
        first == start
            && last == end
            && self.steps + 1 == self.path.len()
            && self.path.iter().all(|&c| grid.is_open(c))
            && self.path.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

/// Errors reported by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// An endpoint lies outside the grid.
    #[error("start or end out of bounds: {cell} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: i32, cols: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Tile;

    #[test]
    fn constructors_keep_invariants() {
        let b = SearchResult::blocked();
        assert!(!b.found && b.steps == 0 && b.path.is_empty() && b.visited_order.is_empty());

        let n = SearchResult::not_found(vec![Cell::ZERO]);
        assert!(!n.found);
        assert_eq!(n.steps, 0);
        assert_eq!(n.visited_order, vec![Cell::ZERO]);

        let f = SearchResult::found(vec![Cell::new(0, 0), Cell::new(0, 1)], vec![]);
        assert_eq!(f.steps, 1);
    }

    #[test]
    fn validity_rejects_jumps_and_walls() {
        let grid = Grid::new(2, 2).with_tile(Cell::new(0, 1), Tile::Wall);
        let s = Cell::new(0, 0);
        let e = Cell::new(1, 1);

        let good = SearchResult::found(vec![s, Cell::new(1, 0), e], vec![]);
        assert!(good.is_valid_for(&grid, s, e));

        let diagonal = SearchResult::found(vec![s, e], vec![]);
        assert!(!diagonal.is_valid_for(&grid, s, e));

        let through_wall = SearchResult::found(vec![s, Cell::new(0, 1), e], vec![]);
        assert!(!through_wall.is_valid_for(&grid, s, e));

        assert!(!good.is_valid_for(&grid, e, s));
    }
}

//! The [`Grid`] type: an immutable 2D array of [`Tile`]s.
//!
//! A `Grid` owns its storage outright. There is no way to mutate one in
//! place: editing goes through [`Grid::with_tile`], which returns a copy.

use thiserror::Error;

use crate::geom::{Bounds, BoundsIter, Cell};
use crate::tile::Tile;

/// Errors raised when building a grid from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or a first row with no columns.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// A row whose length differs from the first row.
    #[error("grid row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An integer other than 0 or 1 in the wire encoding.
    #[error("invalid tile value {0}, expected 0 (open) or 1 (wall)")]
    InvalidTile(i64),
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular maze of [`Tile`]s, indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    tiles: Vec<Tile>,
    bounds: Bounds,
}

impl Grid {
    /// Create an all-open grid. Negative sizes collapse to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            tiles: vec![Tile::Open; bounds.len()],
            bounds,
        }
    }

    /// Build a grid by calling `f` for every cell in row-major order.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Cell) -> Tile) -> Self {
        let bounds = Bounds::new(rows, cols);
        let tiles = bounds.iter().map(&mut f).collect();
        Self { tiles, bounds }
    }

    /// Build a grid from nested rows, checking that it is rectangular and
    /// non-empty.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let mut tiles = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::Ragged {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }
        Ok(Self {
            bounds: Bounds::new(rows.len() as i32, expected as i32),
            tiles,
        })
    }

    /// Nested-rows form, the inverse of [`from_rows`](Self::from_rows).
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        if self.bounds.cols <= 0 {
            return Vec::new();
        }
        self.tiles
            .chunks(self.bounds.cols as usize)
            .map(<[Tile]>::to_vec)
            .collect()
    }

    /// The covered rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// The tile at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Tile> {
        self.bounds.index(c).map(|i| self.tiles[i])
    }

    /// Whether `c` is in bounds and open.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.at(c).is_some_and(Tile::is_open)
    }

    /// A copy of this grid with the tile at `c` replaced. Out-of-bounds
    /// cells leave the copy identical to `self`.
    pub fn with_tile(&self, c: Cell, tile: Tile) -> Grid {
        let mut next = self.clone();
        if let Some(i) = self.bounds.index(c) {
            next.tiles[i] = tile;
        }
        next
    }

    /// Number of tiles equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Row-major iterator over `(Cell, Tile)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Cell, Tile)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Cell, Tile);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        let i = self.grid.bounds.index(c)?;
        Some((c, self.grid.tiles[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Cell, Tile);
    type IntoIter = GridIter<'a>;
    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_rows(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<Tile>> as serde::Deserialize>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const O: Tile = Tile::Open;
    const W: Tile = Tile::Wall;

    #[test]
    fn new_is_all_open() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count(Tile::Open), 12);
        assert_eq!(g.at(Cell::new(2, 3)), Some(Tile::Open));
        assert_eq!(g.at(Cell::new(3, 0)), None);
    }

    #[test]
    fn from_fn_visits_row_major() {
        let mut seen = Vec::new();
        let g = Grid::from_fn(2, 2, |c| {
            seen.push(c);
            if c.row == c.col { W } else { O }
        });
        assert_eq!(seen[1], Cell::new(0, 1));
        assert_eq!(g.to_rows(), vec![vec![W, O], vec![O, W]]);
    }

    #[test]
    fn from_rows_round_trip() {
        let rows = vec![vec![O, W, O], vec![W, O, O]];
        let g = Grid::from_rows(rows.clone()).unwrap();
        assert_eq!(g.bounds(), Bounds::new(2, 3));
        assert_eq!(g.at(Cell::new(1, 0)), Some(W));
        assert_eq!(g.to_rows(), rows);
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(vec![vec![O, O], vec![O]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn with_tile_copies() {
        let g = Grid::new(2, 2);
        let edited = g.with_tile(Cell::new(0, 1), W);
        assert!(g.is_open(Cell::new(0, 1)));
        assert!(!edited.is_open(Cell::new(0, 1)));
        assert_eq!(g.with_tile(Cell::new(5, 5), W), g);
    }

    #[test]
    fn is_open_false_outside() {
        let g = Grid::new(2, 2);
        assert!(!g.is_open(Cell::new(-1, 0)));
        assert!(!g.is_open(Cell::new(0, 2)));
    }

    #[test]
    fn iter_pairs() {
        let g = Grid::from_rows(vec![vec![O, W]]).unwrap();
        let pairs: Vec<_> = g.iter().collect();
        assert_eq!(pairs, vec![(Cell::new(0, 0), O), (Cell::new(0, 1), W)]);
    }
}

//! Geometry primitives: [`Cell`] coordinates and [`Bounds`].
//!
//! Coordinates are `(row, col)`, row-major, 0-based. Both types are small
//! `Copy` values compared by value only.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Rows grow down, columns grow right.
///
/// Signed so that a caller can describe a position outside any grid; the
/// solvers reject those with an out-of-bounds error instead of wrapping.
/// Ordering is row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Neighbour deltas in enumeration order: down, up, right, left.
///
/// Search output (DFS path shape, every `visited_order`) depends on this
/// order.
pub const DIRECTIONS: [Cell; 4] = [
    Cell::new(1, 0),
    Cell::new(-1, 0),
    Cell::new(0, 1),
    Cell::new(0, -1),
];

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours in [`DIRECTIONS`] order. Some may lie
    /// outside any particular grid.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        DIRECTIONS.map(|d| self + d)
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    #[inline]
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

// Serialized as a `[row, col]` pair, the shape clients exchange.
#[cfg(feature = "serde")]
impl serde::Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(self.row, self.col), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (row, col) = <(i32, i32) as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(row, col))
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The half-open rectangle `[0, rows) x [0, cols)` covered by a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create bounds; negative sizes collapse to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds cover no cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Flat row-major index of `c`, or `None` when outside.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index). `idx` must be `< len()`.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The last cell, `(rows - 1, cols - 1)`.
    #[inline]
    pub fn last(self) -> Cell {
        Cell::new(self.rows - 1, self.cols - 1)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Cell;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.cell(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_is_a_pair() {
        let json = serde_json::to_string(&Cell::new(3, 7)).unwrap();
        assert_eq!(json, "[3,7]");
        let back: Cell = serde_json::from_str("[4, 1]").unwrap();
        assert_eq!(back, Cell::new(4, 1));
    }

    #[test]
    fn cell_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Cell>("[1]").is_err());
        assert!(serde_json::from_str::<Cell>("[1, 2, 3]").is_err());
    }
}

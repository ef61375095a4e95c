//! Plain-text rendering of a [`Grid`] with optional search overlays.
//!
//! Layer precedence, lowest to highest: tile glyph, visited cells, path,
//! endpoints.

use std::fmt;

use crate::geom::Cell;
use crate::grid::Grid;

/// Glyph for a cell the search finalized.
pub const VISITED_GLYPH: char = 'o';
/// Glyph for a cell on the returned path.
pub const PATH_GLYPH: char = '*';
/// Glyph for the start cell.
pub const START_GLYPH: char = 'S';
/// Glyph for the end cell.
pub const END_GLYPH: char = 'E';

/// Things drawn over the tiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub start: Option<Cell>,
    pub end: Option<Cell>,
    pub path: &'a [Cell],
    pub visited: &'a [Cell],
}

impl<'a> Overlay<'a> {
    /// An overlay marking only the two endpoints.
    pub fn endpoints(start: Cell, end: Cell) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Add a path layer (builder).
    pub fn with_path(mut self, path: &'a [Cell]) -> Self {
        self.path = path;
        self
    }

    /// Add a visited layer (builder).
    pub fn with_visited(mut self, visited: &'a [Cell]) -> Self {
        self.visited = visited;
        self
    }
}

/// Render `grid` one text line per row, with `overlay` on top. Overlay
/// cells outside the grid are ignored.
pub fn render(grid: &Grid, overlay: &Overlay<'_>) -> String {
    let bounds = grid.bounds();
    let mut canvas: Vec<char> = grid.iter().map(|(_, t)| t.glyph()).collect();

    let mut paint = |c: Cell, ch: char| {
        if let Some(i) = bounds.index(c) {
            canvas[i] = ch;
        }
    };
    for &c in overlay.visited {
        paint(c, VISITED_GLYPH);
    }
    for &c in overlay.path {
        paint(c, PATH_GLYPH);
    }
    if let Some(c) = overlay.start {
        paint(c, START_GLYPH);
    }
    if let Some(c) = overlay.end {
        paint(c, END_GLYPH);
    }

    let cols = bounds.cols.max(1) as usize;
    let mut out = String::with_capacity(canvas.len() + bounds.rows.max(0) as usize);
    for line in canvas.chunks(cols) {
        out.extend(line);
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &Overlay::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    #[test]
    fn plain_grid() {
        let g = Grid::new(2, 3).with_tile(Cell::new(0, 1), Tile::Wall);
        assert_eq!(g.to_string(), ".#.\n...\n");
    }

    #[test]
    fn overlay_precedence() {
        let g = Grid::new(2, 2);
        let path = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)];
        let visited = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)];
        let overlay = Overlay::endpoints(Cell::new(0, 0), Cell::new(1, 1))
            .with_path(&path)
            .with_visited(&visited);
        assert_eq!(render(&g, &overlay), "So\n*E\n");
    }

    #[test]
    fn overlay_outside_grid_is_ignored() {
        let g = Grid::new(1, 2);
        let overlay = Overlay::endpoints(Cell::new(0, 0), Cell::new(4, 4));
        assert_eq!(render(&g, &overlay), "S.\n");
    }
}

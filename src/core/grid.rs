use serde::{Deserialize, Serialize};

use crate::core::models::{Cell, Pos};
use crate::error::GridError;

/// Rectangular cell storage with a fixed width and height, kept as a flat
/// row-major vector. Owns no gameplay logic; all transitions go through
/// `PuzzleState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from parsed rows, padding shorter rows with `pad` so
    /// the result is rectangular.
    pub(crate) fn from_ragged_rows(rows: Vec<Vec<Cell>>, pad: Cell) -> Grid {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32;
        let mut cells = Vec::with_capacity((width * height) as usize);
        for mut row in rows {
            row.resize(width as usize, pad);
            cells.extend(row);
        }
        Grid {
            width,
            height,
            cells,
        }
    }

    /// Rebuilds a grid from raw parts, as decoded from a snapshot. Returns
    /// `None` when the cell count does not match the dimensions.
    pub(crate) fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Option<Grid> {
        if width < 0 || height < 0 {
            return None;
        }
        if cells.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Pos) -> Result<Cell, GridError> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(self.cells[self.index(pos)])
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        let index = self.index(pos);
        self.cells[index] = cell;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let pos = Pos::new(i as i32 % width, i as i32 / width);
            (pos, cell)
        })
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Textual tile view using `Cell::glyph`, one row per line.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self[Pos::new(x, y)].glyph());
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    fn out_of_bounds(&self, pos: Pos) -> GridError {
        GridError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        }
    }
}

impl std::ops::Index<Pos> for Grid {
    type Output = Cell;

    /// Panics on out-of-bounds access; use `get` for checked reads.
    fn index(&self, pos: Pos) -> &Self::Output {
        assert!(self.contains(pos), "position {pos:?} outside grid");
        &self.cells[(pos.y * self.width + pos.x) as usize]
    }
}

impl std::ops::IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        assert!(self.contains(pos), "position {pos:?} outside grid");
        &mut self.cells[(pos.y * self.width + pos.x) as usize]
    }
}

//! Square grid of cells, used both for ship layouts and shot tracking.

use core::fmt;

use crate::common::Cell;
use crate::config::COLUMN_LABELS;

/// An N×N matrix of [`Cell`]s stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell set to [`Cell::Water`].
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Water; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when (`row`, `col`) lies inside the grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    // Only the fleet placer and the turn resolver write cells; both check
    // bounds first.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(self.in_bounds(row, col), "set({}, {}) out of bounds", row, col);
        if self.in_bounds(row, col) {
            self.cells[row * self.size + col] = cell;
        }
    }

    /// Number of cells currently holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of [`Cell::Hit`] marks.
    pub fn hits(&self) -> usize {
        self.count(Cell::Hit)
    }

    /// Iterate over all cells as `(row, col, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / size, i % size, cell))
    }
}

fn column_label(col: usize) -> char {
    COLUMN_LABELS
        .get(col)
        .copied()
        .unwrap_or_else(|| char::from(b'A' + (col % 26) as u8))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{} ", column_label(c))?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, " {} ", r)?;
            for c in 0..self.size {
                write!(f, "{} ", self.cells[r * self.size + c].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {} }}", self.size)?;
        write!(f, "{}", self)
    }
}


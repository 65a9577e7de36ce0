//! Ship orientation and placement geometry.

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// A straight run of `length` cells starting at (`row`, `col`), extending
/// right when horizontal and down when vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    /// Create a placement.
    pub const fn new(row: usize, col: usize, orientation: Orientation, length: usize) -> Self {
        Self {
            row,
            col,
            orientation,
            length,
        }
    }

    /// Returns `true` when every cell of the run lies within an N×N grid.
    pub fn fits(&self, size: usize) -> bool {
        if self.length == 0 {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => {
                self.row < size && self.col.checked_add(self.length).is_some_and(|end| end <= size)
            }
            Orientation::Vertical => {
                self.col < size && self.row.checked_add(self.length).is_some_and(|end| end <= size)
            }
        }
    }

    /// Cells covered by this placement, in order from the origin. Stops early
    /// if a coordinate would overflow `usize`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            orientation,
            length,
        } = *self;
        (0..length).map_while(move |i| match orientation {
            Orientation::Horizontal => col.checked_add(i).map(|c| (row, c)),
            Orientation::Vertical => row.checked_add(i).map(|r| (r, col)),
        })
    }
}


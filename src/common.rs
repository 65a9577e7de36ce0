//! Common types: cell states, shot outcomes and errors.

use thiserror::Error;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Open water, or a cell not yet fired at on a tracking grid.
    #[default]
    Water,
    /// Part of a ship.
    Ship,
    /// A shot that struck a ship.
    Hit,
    /// A shot that found only water.
    Miss,
}

impl Cell {
    /// Character used when printing a grid.
    pub fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => '0',
        }
    }
}

/// Result of firing at a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// Reasons a target token is rejected. Each one forfeits the turn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("empty target")]
    Empty,
    #[error("target must be 2 or 3 characters, got {0}")]
    BadLength(usize),
    #[error("column '{0}' is not a letter A-J")]
    BadColumn(char),
    #[error("row '{0}' is not a digit 0-9")]
    BadRow(char),
    #[error("unexpected trailing character '{0}'")]
    BadTrailing(char),
    #[error("target ({row}, {col}) lies outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Errors raised by placement and the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No position on the grid can hold a ship of this length.
    #[error("no room left for a ship of length {length}")]
    NoRoomForShip { length: usize },
    /// Placement runs past the edge of the grid.
    #[error("ship placement is out of bounds")]
    PlacementOutOfBounds,
    /// Placement covers a cell that already holds a ship.
    #[error("ship placement overlaps another ship")]
    PlacementOverlaps,
    /// A turn was attempted after a winner was declared.
    #[error("the game is already over")]
    GameOver,
}

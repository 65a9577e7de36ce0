//! Resolving a shot against an opponent grid.

use crate::common::{Cell, Outcome, TargetError};
use crate::grid::Grid;
use crate::target::Target;

/// Parse `input` and fire at it. Any malformed token is returned as a
/// [`TargetError`] and leaves both grids untouched.
pub fn resolve_turn(
    opponent: &Grid,
    tracking: &mut Grid,
    input: &str,
) -> Result<Outcome, TargetError> {
    let target: Target = input.parse()?;
    fire(opponent, tracking, target)
}

/// Fire at `target`: a ship cell on `opponent` marks `tracking` as hit,
/// anything else marks it as a miss. Firing again at the same cell
/// rewrites the same mark.
pub fn fire(opponent: &Grid, tracking: &mut Grid, target: Target) -> Result<Outcome, TargetError> {
    let Target { row, col } = target;
    let cell = opponent
        .get(row, col)
        .filter(|_| tracking.in_bounds(row, col))
        .ok_or(TargetError::OutOfBounds { row, col })?;
    let (outcome, mark) = if cell == Cell::Ship {
        (Outcome::Hit, Cell::Hit)
    } else {
        (Outcome::Miss, Cell::Miss)
    };
    tracking.set(row, col, mark);
    Ok(outcome)
}

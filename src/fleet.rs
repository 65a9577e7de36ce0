//! Random, non-overlapping fleet placement.
//!
//! Placement enumerates every valid position for a ship and samples one
//! uniformly, so it always terminates and is reproducible with a seeded RNG.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{Cell, GameError};
use crate::grid::Grid;
use crate::ship::{Orientation, Placement};

/// All placements of a ship of `length` that stay in bounds and cover only
/// water on `grid`.
pub fn valid_placements(grid: &Grid, length: usize) -> Vec<Placement> {
    let size = grid.size();
    let mut out = Vec::new();
    if length == 0 || length > size {
        return out;
    }
    for orientation in Orientation::ALL {
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (size - 1, size - length),
            Orientation::Vertical => (size - length, size - 1),
        };
        for r in 0..=max_r {
            for c in 0..=max_c {
                let placement = Placement::new(r, c, orientation, length);
                if is_clear(grid, &placement) {
                    out.push(placement);
                }
            }
        }
    }
    out
}

fn is_clear(grid: &Grid, placement: &Placement) -> bool {
    placement
        .cells()
        .all(|(r, c)| grid.get(r, c) == Some(Cell::Water))
}

/// Mark every cell of `placement` as [`Cell::Ship`].
pub fn place_ship(grid: &mut Grid, placement: Placement) -> Result<(), GameError> {
    if !placement.fits(grid.size()) {
        return Err(GameError::PlacementOutOfBounds);
    }
    // ensure no overlap
    if !is_clear(grid, &placement) {
        return Err(GameError::PlacementOverlaps);
    }
    for (r, c) in placement.cells() {
        grid.set(r, c, Cell::Ship);
    }
    Ok(())
}

/// Place one ship per entry of `lengths`, in order, at uniformly random
/// valid positions. Returns the committed placements.
pub fn place_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    lengths: &[usize],
    rng: &mut R,
) -> Result<Vec<Placement>, GameError> {
    let mut placed = Vec::with_capacity(lengths.len());
    for &length in lengths {
        let candidates = valid_placements(grid, length);
        let placement = *candidates
            .choose(rng)
            .ok_or(GameError::NoRoomForShip { length })?;
        place_ship(grid, placement)?;
        debug!(
            "placed ship of length {} at ({}, {}) {:?} ({} candidates)",
            length,
            placement.row,
            placement.col,
            placement.orientation,
            candidates.len()
        );
        placed.push(placement);
    }
    Ok(placed)
}

//! A participant in the match: a name plus two private grids.

use rand::Rng;

use crate::common::{Cell, GameError};
use crate::fleet::place_fleet;
use crate::grid::Grid;

/// A named player owning a ship grid and a tracking grid.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    ships: Grid,
    tracking: Grid,
}

impl Player {
    /// Create a player from an already laid-out ship grid. The tracking
    /// grid starts as open water of the same size.
    pub fn new(name: impl Into<String>, ships: Grid) -> Self {
        let tracking = Grid::new(ships.size());
        Self {
            name: name.into(),
            ships,
            tracking,
        }
    }

    /// Create a player whose fleet is placed at random on a fresh grid.
    pub fn with_random_fleet<R: Rng + ?Sized>(
        name: impl Into<String>,
        size: usize,
        fleet: &[usize],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut ships = Grid::new(size);
        place_fleet(&mut ships, fleet, rng)?;
        Ok(Self::new(name, ships))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's own ships. Never shown to the opponent.
    pub fn ships(&self) -> &Grid {
        &self.ships
    }

    /// The player's record of shots against the opponent.
    pub fn tracking(&self) -> &Grid {
        &self.tracking
    }

    pub(crate) fn tracking_mut(&mut self) -> &mut Grid {
        &mut self.tracking
    }

    /// Number of ship segments in this player's fleet.
    pub fn fleet_cells(&self) -> usize {
        self.ships.count(Cell::Ship)
    }

    /// Number of shots taken so far that are still on record.
    pub fn shots_recorded(&self) -> usize {
        self.tracking.hits() + self.tracking.count(Cell::Miss)
    }

    /// Returns `true` once this player's hits cover every segment of the
    /// opponent's fleet.
    pub fn has_sunk(&self, opponent: &Player) -> bool {
        let needed = opponent.fleet_cells();
        needed > 0 && self.tracking.hits() >= needed
    }
}

//! Fixed game parameters.

/// Side length of every grid.
pub const GRID_SIZE: usize = 10;

/// Ship lengths each player places, in placement order.
pub const FLEET: [usize; 4] = [2, 3, 4, 5];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

/// Column labels, one per column of a standard grid.
pub const COLUMN_LABELS: [char; GRID_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Sum of the lengths in `fleet`.
pub const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}

//! Generation step
//!
//! Advances a board by one generation. Every cell reads the same input
//! snapshot; the result is a new `Grid`.

use super::grid::{Cell, Grid};
use super::neighbors::neighbor_sum;

/// Next state of one cell given its alive-neighbor count
#[inline]
pub fn next_state(cell: Cell, alive_neighbors: u8) -> Cell {
    match (cell, alive_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Under/overpopulation, or stays dead
    }
}

/// Advance the board by one generation
pub fn tick(grid: &Grid) -> Grid {
    let next = grid.map(|row, col, cell| next_state(cell, neighbor_sum(grid, row, col)));
    log::trace!(
        "tick: population {} -> {}",
        grid.population(),
        next.population()
    );
    next
}

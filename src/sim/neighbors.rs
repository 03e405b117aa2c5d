//! Moore-neighborhood counting on a clipped board
//!
//! Offsets that leave the board contribute nothing. The board does not wrap.

use super::grid::Grid;
use crate::error::Result;

/// The 8 surrounding offsets as `(d_row, d_col)`
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count alive cells around `(row, col)`, in `0..=8`.
///
/// Fails with `OutOfBounds` when the coordinate itself is off the board.
pub fn count_alive_neighbors(grid: &Grid, row: i64, col: i64) -> Result<u8> {
    grid.get(row, col)?;
    // get() succeeded, so both are non-negative and < size
    Ok(neighbor_sum(grid, row as usize, col as usize))
}

/// Unchecked variant for coordinates already known to be on the board
#[inline]
pub(crate) fn neighbor_sum(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.at(r, c)
        })
        .map(|cell| cell.weight())
        .sum()
}

//! Board state and cell types
//!
//! A `Grid` is a dense, fully populated N×N board. It is never mutated after
//! construction; every generation is a fresh value.

use std::fmt;

use crate::consts::MAX_BOARD_SIZE;
use crate::error::{LifeError, Result};

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric state used when summing neighbors (0 or 1)
    #[inline]
    pub fn weight(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size square board, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead board of `size`×`size` cells
    pub fn new(size: usize) -> Result<Self> {
        let len = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Build a board by evaluating `f(row, col)` for every coordinate
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Result<Self> {
        let len = cell_count(size)?;
        let cells = (0..len).map(|i| f(i / size, i % size)).collect();
        Ok(Self { size, cells })
    }

    /// Dead board with the listed `(row, col)` coordinates alive.
    ///
    /// Any coordinate outside the board is rejected.
    pub fn with_alive(size: usize, alive: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        let mut grid = Self::new(size)?;
        for (row, col) in alive {
            let idx = grid.index(row, col).ok_or(LifeError::OutOfBounds {
                row: i64::try_from(row).unwrap_or(i64::MAX),
                col: i64::try_from(col).unwrap_or(i64::MAX),
                size,
            })?;
            grid.cells[idx] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Board dimension N
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`; negative or too-large coordinates are an error
    pub fn get(&self, row: i64, col: i64) -> Result<Cell> {
        self.checked(row, col).ok_or(LifeError::OutOfBounds {
            row,
            col,
            size: self.size,
        })
    }

    pub fn is_alive(&self, row: i64, col: i64) -> Result<bool> {
        self.get(row, col).map(Cell::is_alive)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of alive cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / size, i % size))
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// In-range lookup returning `None` instead of an error
    #[inline]
    pub(crate) fn checked(&self, row: i64, col: i64) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Unsigned lookup for callers that already hold a base coordinate
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// New board of the same size with each cell replaced by `f(row, col, cell)`
    pub(crate) fn map(&self, mut f: impl FnMut(usize, usize, Cell) -> Cell) -> Self {
        let size = self.size;
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| f(i / size, i % size, cell))
            .collect();
        Self { size, cells }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

/// Number of cells on a `size`×`size` board.
///
/// Sizes of 0 or above `MAX_BOARD_SIZE` are rejected.
pub fn cell_count(size: usize) -> Result<usize> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(LifeError::InvalidSize(size));
    }
    size.checked_mul(size).ok_or(LifeError::InvalidSize(size))
}

impl fmt::Display for Grid {
    /// `#` for alive, `.` for dead, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

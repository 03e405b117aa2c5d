//! Error types for the `life-grid` crate.
//!
//! All fallible operations return [`LifeError`] through the [`Result`] alias.

use crate::sim::Pattern;

/// Errors raised by grid construction, seeding and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeError {
    /// Pattern selector outside {0, 1, 2}.
    #[error("pattern index {0} not allowed")]
    InvalidPattern(u32),

    /// A coordinate lies outside the board.
    #[error("coordinate ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
        /// Board dimension.
        size: usize,
    },

    /// Boards must have at least one cell per side.
    #[error("invalid board size {0}")]
    InvalidSize(usize),

    /// The board is too small to place a fixed pattern around its center.
    #[error("{pattern:?} does not fit on a {size}x{size} board")]
    PatternDoesNotFit {
        /// Pattern that was requested.
        pattern: Pattern,
        /// Board dimension.
        size: usize,
    },

    /// Settings file could not be read or parsed.
    #[error("settings error: {0}")]
    Settings(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LifeError>;

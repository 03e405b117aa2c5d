//! Life Grid - Conway's Game of Life on a bounded board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, neighbor counting, tick, seeding)
//! - `settings`: Driver configuration loaded from JSON
//! - `error`: Error taxonomy shared by every fallible operation

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{LifeError, Result};
pub use settings::Settings;
pub use sim::{Cell, Grid, Pattern, Session, count_alive_neighbors, seed, seed_index, tick};

/// Simulation configuration constants
pub mod consts {
    /// Board dimension of the reference configuration (50x50)
    pub const BOARD_SIZE: usize = 50;

    /// Largest accepted board dimension
    pub const MAX_BOARD_SIZE: usize = 4096;

    /// Reference tick cadence (one generation per second)
    pub const TICK_INTERVAL_MS: u64 = 1000;

    /// Generations the headless driver runs before advancing the pattern
    pub const GENERATIONS_PER_PATTERN: u64 = 100;

    /// Probability of a cell starting alive in the random pattern
    pub const RANDOM_ALIVE_PROBABILITY: f64 = 0.5;

    /// Number of seedable patterns; indices at or above this end a run
    pub const PATTERN_COUNT: u32 = 3;
}

/// Center index of a board side.
///
/// Even boards lean toward the top-left: 50 -> 24, 51 -> 25.
#[inline]
pub const fn center_index(size: usize) -> usize {
    if size % 2 == 0 {
        (size / 2).saturating_sub(1)
    } else {
        size / 2
    }
}

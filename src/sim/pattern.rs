//! Starting patterns
//!
//! Produces the initial board for a run: independent coin flips for
//! `Random`, or a fixed list of offsets around the board center for the
//! static patterns.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid, cell_count};
use crate::center_index;
use crate::consts::{BOARD_SIZE, PATTERN_COUNT, RANDOM_ALIVE_PROBABILITY};
use crate::error::{LifeError, Result};

/// Queen Bee shuttle, `(d_row, d_col)` from the center
pub const QUEEN_BEE: [(isize, isize); 9] = [
    (-3, -1),
    (-3, 0),
    (-2, 1),
    (-1, 2),
    (0, 2),
    (1, 2),
    (2, 1),
    (3, 0),
    (3, -1),
];

/// Tumbler oscillator, `(d_row, d_col)` from the center
pub const TUMBLER: [(isize, isize); 22] = [
    (-4, -2),
    (-4, -1),
    (-4, 1),
    (-4, 2),
    (-3, -2),
    (-3, -1),
    (-3, 1),
    (-3, 2),
    (-2, -1),
    (-2, 1),
    (-1, -3),
    (-1, -1),
    (-1, 1),
    (-1, 3),
    (0, -3),
    (0, -1),
    (0, 1),
    (0, 3),
    (1, -3),
    (1, -2),
    (1, 2),
    (1, 3),
];

/// Seeding mode, selected by index 0, 1 or 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pattern {
    #[default]
    Random,
    QueenBee,
    Tumbler,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Random, Pattern::QueenBee, Pattern::Tumbler];

    /// Pattern for a driver index; anything outside {0, 1, 2} is rejected
    pub fn from_index(index: u32) -> Result<Self> {
        match index {
            0 => Ok(Pattern::Random),
            1 => Ok(Pattern::QueenBee),
            2 => Ok(Pattern::Tumbler),
            _ => Err(LifeError::InvalidPattern(index)),
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Pattern::Random => 0,
            Pattern::QueenBee => 1,
            Pattern::Tumbler => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Random => "Random",
            Pattern::QueenBee => "Queen Bee",
            Pattern::Tumbler => "Tumbler",
        }
    }

    /// Fixed offsets for static patterns; empty for `Random`
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Pattern::Random => &[],
            Pattern::QueenBee => &QUEEN_BEE,
            Pattern::Tumbler => &TUMBLER,
        }
    }

    /// Pattern following this one, or `None` once the run is over
    pub fn next(self) -> Option<Self> {
        let next = self.index() + 1;
        if next < PATTERN_COUNT {
            Self::from_index(next).ok()
        } else {
            None
        }
    }
}

impl TryFrom<u32> for Pattern {
    type Error = LifeError;

    fn try_from(index: u32) -> Result<Self> {
        Self::from_index(index)
    }
}

/// Board factory with a configurable size and random source.
///
/// Without a seed, `Random` draws from a fresh entropy-seeded generator on
/// every call. With a seed, the same PCG32 stream is replayed each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeder {
    size: usize,
    rng_seed: Option<u64>,
}

impl Default for Seeder {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            rng_seed: None,
        }
    }
}

impl Seeder {
    pub fn new(size: usize) -> Result<Self> {
        cell_count(size)?;
        Ok(Self {
            size,
            rng_seed: None,
        })
    }

    /// Make `Random` reproducible
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Seed a board using the configured random source
    pub fn seed(&self, pattern: Pattern) -> Result<Grid> {
        match self.rng_seed {
            Some(seed) => self.seed_with_rng(pattern, &mut Pcg32::seed_from_u64(seed)),
            None => self.seed_with_rng(pattern, &mut rand::rng()),
        }
    }

    /// Seed a board drawing any randomness from `rng`
    pub fn seed_with_rng<R: Rng + ?Sized>(&self, pattern: Pattern, rng: &mut R) -> Result<Grid> {
        let grid = match pattern {
            Pattern::Random => Grid::from_fn(self.size, |_, _| {
                Cell::from(rng.random_bool(RANDOM_ALIVE_PROBABILITY))
            })?,
            Pattern::QueenBee | Pattern::Tumbler => self.place(pattern)?,
        };
        log::debug!(
            "Seeded {} on {}x{} board ({} alive)",
            pattern.as_str(),
            self.size,
            self.size,
            grid.population()
        );
        Ok(grid)
    }

    fn place(&self, pattern: Pattern) -> Result<Grid> {
        let center = center_index(self.size);
        let does_not_fit = LifeError::PatternDoesNotFit {
            pattern,
            size: self.size,
        };
        let coords = pattern
            .offsets()
            .iter()
            .map(|&(dr, dc)| {
                let row = center.checked_add_signed(dr).filter(|&r| r < self.size);
                let col = center.checked_add_signed(dc).filter(|&c| c < self.size);
                row.zip(col).ok_or_else(|| does_not_fit.clone())
            })
            .collect::<Result<Vec<_>>>()?;
        Grid::with_alive(self.size, coords)
    }
}

/// Seed a default-size board with a fresh random source
pub fn seed(pattern: Pattern) -> Result<Grid> {
    Seeder::default().seed(pattern)
}

/// Seed a default-size board from a driver index (0, 1 or 2)
pub fn seed_index(index: u32) -> Result<Grid> {
    seed(Pattern::from_index(index)?)
}

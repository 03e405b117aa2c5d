//! Run driver
//!
//! Owns the current board, the generation counter and the pattern index.
//! Cadence is left to the caller: each `step` is one whole generation.

use super::grid::Grid;
use super::pattern::{Pattern, Seeder};
use super::tick::tick;
use crate::error::Result;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Session {
    seeder: Seeder,
    pattern: Pattern,
    grid: Grid,
    /// Generations since the current pattern was seeded
    generation: u64,
    finished: bool,
}

impl Session {
    /// Start a run at `pattern`
    pub fn new(seeder: Seeder, pattern: Pattern) -> Result<Self> {
        let grid = seeder.seed(pattern)?;
        log::info!("Session started with {} pattern", pattern.as_str());
        Ok(Self {
            seeder,
            pattern,
            grid,
            generation: 0,
            finished: false,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.seeder()?, settings.start_pattern)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Replace the board with its next generation
    pub fn step(&mut self) -> &Grid {
        self.grid = tick(&self.grid);
        self.generation += 1;
        &self.grid
    }

    /// Advance to the next pattern and reseed.
    ///
    /// Returns `false` once the last pattern has been played; the board is
    /// left as it was and the session is marked finished.
    pub fn next_pattern(&mut self) -> Result<bool> {
        let Some(next) = self.pattern.next() else {
            log::info!("All patterns played, run finished");
            self.finished = true;
            return Ok(false);
        };
        self.grid = self.seeder.seed(next)?;
        self.pattern = next;
        self.generation = 0;
        log::info!("Switched to {} pattern", next.as_str());
        Ok(true)
    }

    /// Reseed the current pattern from scratch
    pub fn restart(&mut self) -> Result<()> {
        self.grid = self.seeder.seed(self.pattern)?;
        self.generation = 0;
        self.finished = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts_generations() {
        let mut session = Session::new(Seeder::default(), Pattern::Tumbler).unwrap();
        let start = session.grid().clone();
        session.step();
        session.step();
        assert_eq!(session.generation(), 2);
        assert_eq!(session.grid(), &tick(&tick(&start)));
    }

    #[test]
    fn test_cycles_through_patterns_then_finishes() {
        let seeder = Seeder::default().with_rng_seed(99);
        let mut session = Session::new(seeder, Pattern::Random).unwrap();
        session.step();

        assert!(session.next_pattern().unwrap());
        assert_eq!(session.pattern(), Pattern::QueenBee);
        assert_eq!(session.generation(), 0);
        assert_eq!(session.grid().population(), 9);

        assert!(session.next_pattern().unwrap());
        assert_eq!(session.pattern(), Pattern::Tumbler);

        assert!(!session.next_pattern().unwrap());
        assert!(session.is_finished());
        assert_eq!(session.pattern(), Pattern::Tumbler);
    }

    #[test]
    fn test_restart_reseeds() {
        let mut session = Session::new(Seeder::default(), Pattern::QueenBee).unwrap();
        let start = session.grid().clone();
        for _ in 0..5 {
            session.step();
        }
        session.restart().unwrap();
        assert_eq!(session.grid(), &start);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            board_size: 20,
            start_pattern: Pattern::QueenBee,
            ..Settings::default()
        };
        let session = Session::from_settings(&settings).unwrap();
        assert_eq!(session.grid().size(), 20);
        assert_eq!(session.pattern(), Pattern::QueenBee);
    }
}

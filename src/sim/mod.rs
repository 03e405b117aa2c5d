//! Deterministic simulation module
//!
//! All Game of Life logic lives here. This module must be pure:
//! - Boards are values; a tick returns a new board
//! - Randomness only in seeding, from an injectable source
//! - No rendering or platform dependencies

pub mod grid;
pub mod neighbors;
pub mod pattern;
pub mod session;
pub mod tick;

pub use grid::{Cell, Grid};
pub use neighbors::count_alive_neighbors;
pub use pattern::{Pattern, QUEEN_BEE, Seeder, TUMBLER, seed, seed_index};
pub use session::Session;
pub use tick::{next_state, tick};

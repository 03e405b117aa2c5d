//! Life Grid entry point
//!
//! Headless driver: seeds each pattern in turn and advances it on a fixed
//! cadence, logging generation and population. `RUST_LOG=debug` also dumps
//! each seeded board.

use std::process::ExitCode;

use life_grid::{Session, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Life Grid starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> life_grid::Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::info!(
        "Board {}x{}, {} generations per pattern, {} ms per tick",
        settings.board_size,
        settings.board_size,
        settings.generations_per_pattern,
        settings.tick_interval_ms
    );

    let mut session = Session::from_settings(&settings)?;
    loop {
        log::debug!("{} seed:\n{}", session.pattern().as_str(), session.grid());
        for _ in 0..settings.generations_per_pattern {
            std::thread::sleep(settings.tick_interval());
            let population = session.step().population();
            log::info!(
                "{} generation {}: {} alive",
                session.pattern().as_str(),
                session.generation(),
                population
            );
        }
        if !session.next_pattern()? {
            break;
        }
    }
    Ok(())
}

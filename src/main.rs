//! Pizza Dash entry point
//!
//! Headless demo driver: runs the simulation with a fixed-step clock and a
//! naive autoplayer, then dumps the final snapshot as JSON. Useful for
//! smoke-testing tuning changes without a presentation layer attached.

use pizza_dash::scheduler::{FixedStepClock, FrameDriver};
use pizza_dash::{Config, ConfigError, Game, Phase};

/// Two minutes at 60 Hz
const MAX_FRAMES: u64 = 2 * 60 * 60;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let mut game = Game::new(Config::default())?;
    let mut driver = FrameDriver::new(FixedStepClock::default());
    driver.start();

    // Autoplayer: hop on a fixed cadence; it will lose eventually
    let mut frame: u64 = 0;
    while game.snapshot().phase == Phase::Running && frame < MAX_FRAMES {
        if frame % 50 == 0 {
            game.trigger_jump();
        }
        driver.step(&mut game);
        frame += 1;
    }
    driver.stop();

    let snap = game.snapshot();
    log::info!(
        "run ended after {frame} frames: {} miles, {} pizzas, phase {:?}",
        snap.miles_covered,
        snap.pizzas_collected,
        snap.phase
    );
    if let Ok(json) = serde_json::to_string_pretty(&snap) {
        println!("{json}");
    }
    Ok(())
}

//! Frame scheduling
//!
//! The simulation itself never sleeps or reads a clock; it just consumes
//! timestamps handed to [`crate::Game::on_frame`]. This module supplies the
//! "run a tick, then arrange the next one" plumbing as an explicit driver so
//! hosts can pump frames from whatever refresh callback they have, and tests
//! can drive ticks synchronously with a manual clock. `stop` really cancels:
//! a stopped driver delivers no further frames until started again.

use std::time::Instant;

use crate::game::Game;

/// Source of monotonic frame timestamps in milliseconds
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock time since construction
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Deterministic clock that advances a fixed step per frame; the default
/// step approximates a 60 Hz display
#[derive(Debug)]
pub struct FixedStepClock {
    now: f64,
    step: f64,
}

impl FixedStepClock {
    pub fn new(step_ms: f64) -> Self {
        Self {
            now: 0.0,
            step: step_ms,
        }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(1000.0 / 60.0)
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&mut self) -> f64 {
        let t = self.now;
        self.now += self.step;
        t
    }
}

/// Manually advanced clock for tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ms: f64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now
    }
}

/// Pumps frames from a clock into a game while started
#[derive(Debug)]
pub struct FrameDriver<C: Clock> {
    clock: C,
    running: bool,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running: false,
        }
    }

    /// Arm the driver; frames flow on subsequent `step` calls
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Cancel the pending reschedule: no further frames until `start`
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Deliver one frame if started. Returns whether a frame was delivered.
    pub fn step(&mut self, game: &mut Game) -> bool {
        if !self.running {
            return false;
        }
        game.on_frame(self.clock.now_ms());
        true
    }

    /// Deliver up to `n` frames; stops early if the driver is stopped
    pub fn run_frames(&mut self, game: &mut Game, n: u32) -> u32 {
        let mut delivered = 0;
        for _ in 0..n {
            if !self.step(game) {
                break;
            }
            delivered += 1;
        }
        delivered
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

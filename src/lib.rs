//! Pizza Dash - a side-scrolling runner simulation core
//!
//! Core modules:
//! - `sim`: deterministic per-frame simulation (physics, spawning, collisions, difficulty)
//! - `game`: facade the presentation layer drives and reads snapshots from
//! - `input`: held-key latch with edge-triggered jump/pause events
//! - `scheduler`: clock + frame-driver abstraction for headless and test use
//! - `config`: validated tuning values
//!
//! The crate renders nothing. A presentation layer calls [`Game::on_frame`]
//! once per display refresh, forwards key events into the input latch, and
//! redraws from [`Game::snapshot`].

pub mod config;
pub mod game;
pub mod input;
pub mod scheduler;
pub mod sim;

pub use config::{Config, ConfigError};
pub use game::{Game, ObstacleView, PickupView, PlayerView, Snapshot};
pub use input::{FrameInput, HorizontalDir, InputLatch};
pub use sim::{GameState, ObstacleColor, Phase};

/// Default tuning constants
pub mod consts {
    /// Viewport dimensions (world units == pixels at 1:1 scale)
    pub const VIEW_WIDTH: f32 = 600.0;
    pub const VIEW_HEIGHT: f32 = 350.0;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    /// Fixed screen column the player is rendered at
    pub const PLAYER_SCREEN_X: f32 = 100.0;

    /// Vertical physics (per tick, screen coords: +y is down)
    pub const GRAVITY: f32 = 0.7;
    pub const JUMP_STRENGTH: f32 = -13.0;
    pub const JUMP_BOOST_STRENGTH: f32 = -7.0;
    pub const STOMP_BOUNCE_STRENGTH: f32 = -8.0;
    pub const PLAYER_HORIZONTAL_SPEED: f32 = 5.0;

    /// Obstacle size bounds
    pub const OBSTACLE_MIN_WIDTH: f32 = 24.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 48.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 24.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 72.0;
    /// Probability a new obstacle rests on the ground (rest are floating)
    pub const GROUND_OBSTACLE_CHANCE: f64 = 0.7;

    /// Pizza pickup size
    pub const PIZZA_WIDTH: f32 = 28.0;
    pub const PIZZA_HEIGHT: f32 = 28.0;

    /// Starting difficulty
    pub const INITIAL_OBSTACLE_SPEED: f32 = 2.5;
    pub const INITIAL_OBSTACLE_SPAWN_INTERVAL_MS: f64 = 2200.0;
    pub const INITIAL_PIZZA_SPAWN_INTERVAL_MS: f64 = 2800.0;

    /// Difficulty ramp: applied once per milestone crossing
    pub const DIFFICULTY_MILESTONE_MILES: u32 = 75;
    pub const OBSTACLE_SPEED_STEP: f32 = 0.1;
    pub const OBSTACLE_INTERVAL_STEP_MS: f64 = 60.0;
    pub const MIN_OBSTACLE_SPAWN_INTERVAL_MS: f64 = 600.0;
    pub const PIZZA_INTERVAL_STEP_MS: f64 = 40.0;
    pub const MIN_PIZZA_SPAWN_INTERVAL_MS: f64 = 1200.0;

    /// Distance counter cadence (independent of tick rate)
    pub const MILE_INTERVAL_MS: f64 = 100.0;

    /// Run-cycle animation cadence (presentation only)
    pub const ANIMATION_FRAME_INTERVAL_MS: f64 = 150.0;

    /// Stomp geometry (empirically tuned, see `sim::collision`)
    pub const STOMP_TOLERANCE_FRAC: f32 = 0.2;
    pub const STOMP_DEPTH_FRAC: f32 = 0.5;

    /// Clamp on per-frame wall-clock delta (tab switch, debugger pause)
    pub const MAX_FRAME_DELTA_MS: f64 = 100.0;
}

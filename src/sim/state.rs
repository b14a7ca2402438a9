//! Game state and core simulation types
//!
//! One explicit state value owns everything a run mutates: player kinematics,
//! live entities, score counters, difficulty, spawn-gate anchors and the RNG.
//! All coordinates are world-space; `scroll` derives screen positions.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Active gameplay
    Running,
    /// Frozen; the frame driver keeps ticking at idle
    Paused,
    /// Run ended by a lethal collision; only restart leaves this state
    GameOver,
}

/// Palette slot for obstacle rendering; no gameplay meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleColor {
    One,
    Two,
    Three,
}

impl ObstacleColor {
    pub const ALL: [ObstacleColor; 3] = [ObstacleColor::One, ObstacleColor::Two, ObstacleColor::Three];

    /// 1-based palette index for CSS variable lookup on the presentation side
    pub fn index(self) -> u8 {
        match self {
            ObstacleColor::One => 1,
            ObstacleColor::Two => 2,
            ObstacleColor::Three => 3,
        }
    }
}

/// A hazard entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub world_x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: ObstacleColor,
}

/// A collectible pizza
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub world_x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// The player's kinematic state
///
/// `y` is the top edge of the bounding box; standing on the floor means
/// `y == cfg.ground_y()`. `prev_y` is the position at the start of the
/// current tick, kept explicitly for the stomp "came from above" check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub world_x: f32,
    pub y: f32,
    pub prev_y: f32,
    pub vel_y: f32,
    pub is_jumping: bool,
    pub can_boost_jump: bool,
    /// Presentation-only movement flag
    pub is_moving_horizontally: bool,
    /// Presentation-only run-cycle frame (0 = standing, 1/2 = steps)
    pub animation_frame: u8,
}

impl Player {
    fn new(cfg: &Config) -> Self {
        Self {
            world_x: cfg.player_screen_x,
            y: cfg.ground_y(),
            prev_y: cfg.ground_y(),
            vel_y: 0.0,
            is_jumping: false,
            can_boost_jump: false,
            is_moving_horizontally: false,
            animation_frame: 0,
        }
    }

    /// Apply an edge-triggered jump press: ground jump, or the single mid-air
    /// boost while still ascending. Anything else is ignored.
    pub fn apply_jump(&mut self, cfg: &Config) {
        if !self.is_jumping {
            self.vel_y = cfg.jump_strength;
            self.is_jumping = true;
            self.can_boost_jump = true;
        } else if self.can_boost_jump && self.vel_y < 0.0 {
            self.vel_y += cfg.jump_boost_strength;
            self.can_boost_jump = false;
        }
    }

    /// Feet position at the start of the current tick
    pub fn prev_feet_y(&self, cfg: &Config) -> f32 {
        self.prev_y + cfg.player_height
    }
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, reused on reset so a restart replays the same spawn stream
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: Phase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,

    pub pizzas_collected: u32,
    pub miles_covered: u32,

    pub obstacle_speed: f32,
    pub obstacle_spawn_interval_ms: f64,
    pub pizza_spawn_interval_ms: f64,
    pub last_difficulty_milestone: u32,

    /// Simulated time, advanced only while Running. Spawn gates and the
    /// distance cadence run on this clock so pausing freezes them for free.
    pub run_time_ms: f64,
    pub mile_accum_ms: f64,
    pub anim_accum_ms: f64,
    pub last_obstacle_spawn_ms: f64,
    pub last_pizza_spawn_ms: f64,

    next_id: u32,
}

impl GameState {
    /// Fresh run state, ready to tick
    pub fn new(cfg: &Config, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Running,
            player: Player::new(cfg),
            obstacles: Vec::new(),
            pickups: Vec::new(),
            pizzas_collected: 0,
            miles_covered: 0,
            obstacle_speed: cfg.initial_obstacle_speed,
            obstacle_spawn_interval_ms: cfg.initial_obstacle_spawn_interval_ms,
            pizza_spawn_interval_ms: cfg.initial_pizza_spawn_interval_ms,
            last_difficulty_milestone: 0,
            run_time_ms: 0.0,
            mile_accum_ms: 0.0,
            anim_accum_ms: 0.0,
            last_obstacle_spawn_ms: 0.0,
            last_pizza_spawn_ms: 0.0,
            next_id: 1,
        }
    }

    /// Full reset to start-of-run defaults; every field reinitializes
    pub fn reset(&mut self, cfg: &Config) {
        *self = Self::new(cfg, self.seed);
    }

    /// Allocate a unique entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Derived scroll offset (see `scroll`)
    pub fn world_scroll_x(&self, cfg: &Config) -> f32 {
        super::scroll::world_scroll_x(self.player.world_x, cfg.player_screen_x)
    }
}

//! Tuning configuration
//!
//! Every constant the simulation consumes lives here so presentation code can
//! read (but never mutate) the values it needs for layout, and so tests can
//! run with altered geometry. Validation fails fast on nonsense values rather
//! than clamping them silently.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Configuration validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} is an upward impulse and must be negative (got {value})")]
    NotUpward { name: &'static str, value: f32 },
    #[error("{name} bounds are inverted ({min} > {max})")]
    InvertedBounds {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must lie within [0, 1] (got {value})")]
    FractionOutOfRange { name: &'static str, value: f64 },
    #[error("player screen x {x} must lie inside the viewport (width {width})")]
    PlayerColumnOutsideViewport { x: f32, width: f32 },
    #[error("{name} floor {floor}ms exceeds the initial interval {initial}ms")]
    FloorAboveInitial {
        name: &'static str,
        floor: f64,
        initial: f64,
    },
    #[error("player ({width}x{height}) does not fit the viewport ({view_width}x{view_height})")]
    PlayerLargerThanViewport {
        width: f32,
        height: f32,
        view_width: f32,
        view_height: f32,
    },
}

/// All simulation tuning values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // === Viewport / player geometry ===
    pub view_width: f32,
    pub view_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Fixed screen column the player is drawn at; the world scrolls beneath
    pub player_screen_x: f32,

    // === Kinematics (per tick) ===
    pub gravity: f32,
    pub jump_strength: f32,
    pub jump_boost_strength: f32,
    pub stomp_bounce_strength: f32,
    pub horizontal_speed: f32,

    // === Obstacles ===
    pub obstacle_min_width: f32,
    pub obstacle_max_width: f32,
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,
    pub ground_obstacle_chance: f64,

    // === Pickups ===
    pub pizza_width: f32,
    pub pizza_height: f32,

    // === Difficulty ===
    pub initial_obstacle_speed: f32,
    pub initial_obstacle_spawn_interval_ms: f64,
    pub initial_pizza_spawn_interval_ms: f64,
    pub difficulty_milestone_miles: u32,
    pub obstacle_speed_step: f32,
    pub obstacle_interval_step_ms: f64,
    pub min_obstacle_spawn_interval_ms: f64,
    pub pizza_interval_step_ms: f64,
    pub min_pizza_spawn_interval_ms: f64,

    // === Clocks ===
    pub mile_interval_ms: f64,
    pub animation_frame_interval_ms: f64,
    pub max_frame_delta_ms: f64,

    // === Stomp geometry ===
    /// Previous-tick feet may be this fraction of obstacle height below its
    /// top edge and still count as "came from above"
    pub stomp_tolerance_frac: f32,
    /// Current feet must not have penetrated deeper than this fraction
    pub stomp_depth_frac: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_width: consts::VIEW_WIDTH,
            view_height: consts::VIEW_HEIGHT,
            player_width: consts::PLAYER_WIDTH,
            player_height: consts::PLAYER_HEIGHT,
            player_screen_x: consts::PLAYER_SCREEN_X,

            gravity: consts::GRAVITY,
            jump_strength: consts::JUMP_STRENGTH,
            jump_boost_strength: consts::JUMP_BOOST_STRENGTH,
            stomp_bounce_strength: consts::STOMP_BOUNCE_STRENGTH,
            horizontal_speed: consts::PLAYER_HORIZONTAL_SPEED,

            obstacle_min_width: consts::OBSTACLE_MIN_WIDTH,
            obstacle_max_width: consts::OBSTACLE_MAX_WIDTH,
            obstacle_min_height: consts::OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: consts::OBSTACLE_MAX_HEIGHT,
            ground_obstacle_chance: consts::GROUND_OBSTACLE_CHANCE,

            pizza_width: consts::PIZZA_WIDTH,
            pizza_height: consts::PIZZA_HEIGHT,

            initial_obstacle_speed: consts::INITIAL_OBSTACLE_SPEED,
            initial_obstacle_spawn_interval_ms: consts::INITIAL_OBSTACLE_SPAWN_INTERVAL_MS,
            initial_pizza_spawn_interval_ms: consts::INITIAL_PIZZA_SPAWN_INTERVAL_MS,
            difficulty_milestone_miles: consts::DIFFICULTY_MILESTONE_MILES,
            obstacle_speed_step: consts::OBSTACLE_SPEED_STEP,
            obstacle_interval_step_ms: consts::OBSTACLE_INTERVAL_STEP_MS,
            min_obstacle_spawn_interval_ms: consts::MIN_OBSTACLE_SPAWN_INTERVAL_MS,
            pizza_interval_step_ms: consts::PIZZA_INTERVAL_STEP_MS,
            min_pizza_spawn_interval_ms: consts::MIN_PIZZA_SPAWN_INTERVAL_MS,

            mile_interval_ms: consts::MILE_INTERVAL_MS,
            animation_frame_interval_ms: consts::ANIMATION_FRAME_INTERVAL_MS,
            max_frame_delta_ms: consts::MAX_FRAME_DELTA_MS,

            stomp_tolerance_frac: consts::STOMP_TOLERANCE_FRAC,
            stomp_depth_frac: consts::STOMP_DEPTH_FRAC,
        }
    }
}

impl Config {
    /// Ground line for the player's top edge: standing on the floor means
    /// `player.y == ground_y()`
    pub fn ground_y(&self) -> f32 {
        self.view_height - self.player_height
    }

    /// Check every value the simulation depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("view_width", self.view_width as f64),
            ("view_height", self.view_height as f64),
            ("player_width", self.player_width as f64),
            ("player_height", self.player_height as f64),
            ("gravity", self.gravity as f64),
            ("horizontal_speed", self.horizontal_speed as f64),
            ("obstacle_min_width", self.obstacle_min_width as f64),
            ("obstacle_min_height", self.obstacle_min_height as f64),
            ("pizza_width", self.pizza_width as f64),
            ("pizza_height", self.pizza_height as f64),
            ("initial_obstacle_speed", self.initial_obstacle_speed as f64),
            (
                "initial_obstacle_spawn_interval_ms",
                self.initial_obstacle_spawn_interval_ms,
            ),
            (
                "initial_pizza_spawn_interval_ms",
                self.initial_pizza_spawn_interval_ms,
            ),
            (
                "min_obstacle_spawn_interval_ms",
                self.min_obstacle_spawn_interval_ms,
            ),
            (
                "min_pizza_spawn_interval_ms",
                self.min_pizza_spawn_interval_ms,
            ),
            (
                "difficulty_milestone_miles",
                self.difficulty_milestone_miles as f64,
            ),
            ("mile_interval_ms", self.mile_interval_ms),
            (
                "animation_frame_interval_ms",
                self.animation_frame_interval_ms,
            ),
            ("max_frame_delta_ms", self.max_frame_delta_ms),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let upward = [
            ("jump_strength", self.jump_strength),
            ("jump_boost_strength", self.jump_boost_strength),
            ("stomp_bounce_strength", self.stomp_bounce_strength),
        ];
        for (name, value) in upward {
            if !(value < 0.0) {
                return Err(ConfigError::NotUpward { name, value });
            }
        }

        if self.obstacle_min_width > self.obstacle_max_width {
            return Err(ConfigError::InvertedBounds {
                name: "obstacle_width",
                min: self.obstacle_min_width,
                max: self.obstacle_max_width,
            });
        }
        if self.obstacle_min_height > self.obstacle_max_height {
            return Err(ConfigError::InvertedBounds {
                name: "obstacle_height",
                min: self.obstacle_min_height,
                max: self.obstacle_max_height,
            });
        }

        let fractions = [
            ("ground_obstacle_chance", self.ground_obstacle_chance),
            ("stomp_tolerance_frac", self.stomp_tolerance_frac as f64),
            ("stomp_depth_frac", self.stomp_depth_frac as f64),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }

        if self.player_screen_x < 0.0 || self.player_screen_x >= self.view_width {
            return Err(ConfigError::PlayerColumnOutsideViewport {
                x: self.player_screen_x,
                width: self.view_width,
            });
        }
        if self.player_width > self.view_width || self.player_height > self.view_height {
            return Err(ConfigError::PlayerLargerThanViewport {
                width: self.player_width,
                height: self.player_height,
                view_width: self.view_width,
                view_height: self.view_height,
            });
        }

        if self.min_obstacle_spawn_interval_ms > self.initial_obstacle_spawn_interval_ms {
            return Err(ConfigError::FloorAboveInitial {
                name: "obstacle_spawn_interval",
                floor: self.min_obstacle_spawn_interval_ms,
                initial: self.initial_obstacle_spawn_interval_ms,
            });
        }
        if self.min_pizza_spawn_interval_ms > self.initial_pizza_spawn_interval_ms {
            return Err(ConfigError::FloorAboveInitial {
                name: "pizza_spawn_interval",
                floor: self.min_pizza_spawn_interval_ms,
                initial: self.initial_pizza_spawn_interval_ms,
            });
        }

        Ok(())
    }
}

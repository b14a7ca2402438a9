//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One tick per animation frame, driven by the caller's timestamps
//! - Seeded RNG only
//! - Stable entity iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scroll;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, ObstacleHit, classify_obstacle_hit};
pub use scroll::{background_offset, is_visible, screen_x, world_scroll_x};
pub use state::{GameState, Obstacle, ObstacleColor, Phase, Pickup, Player};
pub use tick::tick;

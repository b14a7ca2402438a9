//! Collision detection and stomp classification
//!
//! Everything here works on axis-aligned screen-space rectangles: the player
//! sits at a fixed column and entity world positions are mapped through the
//! scroll offset before they get here. The interesting case is telling a stomp
//! (landed on the obstacle from above) apart from a lethal side hit, using the
//! player's previous-tick feet position.

use glam::Vec2;

use crate::config::Config;

use super::state::{Obstacle, Player};

/// Axis-aligned bounding box, top-left anchored (+y is down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict AABB overlap; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && self.max().x > other.min.x
            && self.min.y < other.max().y
            && self.max().y > other.min.y
    }
}

/// Outcome of a player/obstacle overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleHit {
    /// Landed on top: obstacle is destroyed, player bounces
    Stomp,
    /// Anything else: the run ends
    Lethal,
}

/// Player's screen-space rectangle (fixed column, current y)
pub fn player_rect(player: &Player, cfg: &Config) -> Aabb {
    Aabb::new(
        cfg.player_screen_x,
        player.y,
        cfg.player_width,
        cfg.player_height,
    )
}

/// Obstacle's screen-space rectangle for the given scroll offset
pub fn obstacle_rect(obstacle: &Obstacle, scroll_x: f32) -> Aabb {
    Aabb::new(
        super::scroll::screen_x(obstacle.world_x, scroll_x),
        obstacle.y,
        obstacle.width,
        obstacle.height,
    )
}

/// Classify an overlap between the player and one obstacle.
///
/// Returns `None` when the rects do not overlap. A stomp requires all of:
/// - the player is falling (`vel_y > 0`)
/// - the player's feet at the start of the tick were at or above the
///   obstacle's top edge, within a tolerance band of
///   `stomp_tolerance_frac * height`
/// - the feet have only reached into the top `stomp_depth_frac` of the
///   obstacle, not through it
///
/// The tolerance and depth fractions are empirically tuned and make no claim
/// of generalizing to very flat or very tall obstacles; they are configurable
/// for that reason.
pub fn classify_obstacle_hit(
    player: &Aabb,
    prev_feet_y: f32,
    vel_y: f32,
    obstacle: &Aabb,
    cfg: &Config,
) -> Option<ObstacleHit> {
    if !player.overlaps(obstacle) {
        return None;
    }

    let tolerance = cfg.stomp_tolerance_frac * obstacle.size.y;
    let max_depth = obstacle.top() + cfg.stomp_depth_frac * obstacle.size.y;

    let falling = vel_y > 0.0;
    let came_from_above = prev_feet_y <= obstacle.top() + tolerance;
    let shallow = player.bottom() <= max_depth;

    if falling && came_from_above && shallow {
        Some(ObstacleHit::Stomp)
    } else {
        Some(ObstacleHit::Lethal)
    }
}

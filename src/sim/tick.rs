//! Per-frame simulation tick
//!
//! One call per animation frame. Order inside a tick is load-bearing:
//! physics integration runs before spawning, spawning before entity scroll
//! and collision resolution, and the difficulty check last so it sees the
//! just-updated distance counter.

use crate::config::Config;
use crate::input::FrameInput;

use super::collision::{self, ObstacleHit};
use super::scroll;
use super::spawn;
use super::state::{GameState, Phase};

/// Advance the run by one frame.
///
/// `dt_ms` is the wall-clock delta since the previous frame; it is clamped to
/// `cfg.max_frame_delta_ms` so a backgrounded tab cannot fast-forward the run.
/// While paused or after game over this only services the pause toggle.
pub fn tick(state: &mut GameState, input: &FrameInput, dt_ms: f64, cfg: &Config) {
    if input.pause {
        match state.phase {
            Phase::Running => {
                state.phase = Phase::Paused;
                log::info!("paused at {} miles", state.miles_covered);
                return;
            }
            Phase::Paused => {
                state.phase = Phase::Running;
                log::info!("resumed");
            }
            // Pause has no meaning once the run is over
            Phase::GameOver => {}
        }
    }
    if state.phase != Phase::Running {
        return;
    }

    let dt_ms = dt_ms.clamp(0.0, cfg.max_frame_delta_ms);
    state.run_time_ms += dt_ms;

    advance_miles(state, cfg, dt_ms);
    integrate_player(state, input, cfg, dt_ms);
    spawn::run_spawners(state, cfg);
    advance_entities(state);
    collect_pickups(state, cfg);
    resolve_obstacles(state, cfg);
    cull_entities(state, cfg);
    apply_difficulty_ramp(state, cfg);
}

/// Distance counter: a fixed cadence on running time, independent of the
/// frame rate the host delivers
fn advance_miles(state: &mut GameState, cfg: &Config, dt_ms: f64) {
    state.mile_accum_ms += dt_ms;
    while state.mile_accum_ms >= cfg.mile_interval_ms {
        state.miles_covered += 1;
        state.mile_accum_ms -= cfg.mile_interval_ms;
    }
}

fn integrate_player(state: &mut GameState, input: &FrameInput, cfg: &Config, dt_ms: f64) {
    state.player.prev_y = state.player.y;

    if input.jump {
        state.player.apply_jump(cfg);
    }

    // Horizontal: both keys may be held (net zero movement, but the run
    // animation still plays, matching how it feels to mash both)
    let mut world_x = state.player.world_x;
    let mut moving = false;
    if input.left {
        world_x -= cfg.horizontal_speed;
        moving = true;
    }
    if input.right {
        world_x += cfg.horizontal_speed;
        moving = true;
    }
    // The world can never scroll backwards past its start
    state.player.world_x = world_x.max(cfg.player_screen_x);
    state.player.is_moving_horizontally = moving;

    // Run-cycle frame for presentation; 0 when standing
    if moving {
        state.anim_accum_ms += dt_ms;
        while state.anim_accum_ms >= cfg.animation_frame_interval_ms {
            state.player.animation_frame = match state.player.animation_frame {
                0 | 2 => 1,
                _ => 2,
            };
            state.anim_accum_ms -= cfg.animation_frame_interval_ms;
        }
    } else {
        state.player.animation_frame = 0;
        state.anim_accum_ms = 0.0;
    }

    // Vertical kinematics with ground clamp; the clamp is the only place
    // is_jumping ever returns to false
    state.player.vel_y += cfg.gravity;
    state.player.y += state.player.vel_y;
    if state.player.y >= cfg.ground_y() {
        state.player.y = cfg.ground_y();
        state.player.vel_y = 0.0;
        state.player.is_jumping = false;
        state.player.can_boost_jump = false;
    }
}

/// Everything scrolls left at the current obstacle speed
fn advance_entities(state: &mut GameState) {
    let speed = state.obstacle_speed;
    for obs in &mut state.obstacles {
        obs.world_x -= speed;
    }
    for pickup in &mut state.pickups {
        pickup.world_x -= speed;
    }
}

fn collect_pickups(state: &mut GameState, cfg: &Config) {
    let scroll_x = state.world_scroll_x(cfg);
    let player = collision::player_rect(&state.player, cfg);

    let mut collected = 0;
    state.pickups.retain(|pickup| {
        let rect = collision::Aabb::new(
            scroll::screen_x(pickup.world_x, scroll_x),
            pickup.y,
            pickup.width,
            pickup.height,
        );
        if player.overlaps(&rect) {
            log::debug!("collected pizza #{}", pickup.id);
            collected += 1;
            false
        } else {
            true
        }
    });
    state.pizzas_collected += collected;
}

/// Resolve the first player/obstacle overlap in spawn order. A stomp removes
/// the obstacle and bounces the player; anything else ends the run.
fn resolve_obstacles(state: &mut GameState, cfg: &Config) {
    let scroll_x = state.world_scroll_x(cfg);
    let player = collision::player_rect(&state.player, cfg);
    let prev_feet_y = state.player.prev_feet_y(cfg);
    let vel_y = state.player.vel_y;

    let mut stomped = None;
    for (i, obs) in state.obstacles.iter().enumerate() {
        let rect = collision::obstacle_rect(obs, scroll_x);
        match collision::classify_obstacle_hit(&player, prev_feet_y, vel_y, &rect, cfg) {
            None => continue,
            Some(ObstacleHit::Stomp) => {
                stomped = Some(i);
                break;
            }
            Some(ObstacleHit::Lethal) => {
                log::info!(
                    "run over: hit obstacle #{} after {} miles, {} pizzas",
                    obs.id,
                    state.miles_covered,
                    state.pizzas_collected
                );
                state.phase = Phase::GameOver;
                return;
            }
        }
    }

    if let Some(i) = stomped {
        let obs = state.obstacles.remove(i);
        log::debug!("stomped obstacle #{}", obs.id);
        let player = &mut state.player;
        player.vel_y = cfg.stomp_bounce_strength;
        // A stomp grants a fresh boost window, same as a ground jump
        player.is_jumping = true;
        player.can_boost_jump = true;
    }
}

/// Drop entities fully scrolled past the left edge
fn cull_entities(state: &mut GameState, cfg: &Config) {
    let scroll_x = state.world_scroll_x(cfg);
    state
        .obstacles
        .retain(|obs| scroll::screen_x(obs.world_x, scroll_x) + obs.width > 0.0);
    state
        .pickups
        .retain(|p| scroll::screen_x(p.world_x, scroll_x) + p.width > 0.0);
}

/// Speed up and tighten spawn intervals once per milestone crossing. The
/// strict `>` against the stored milestone makes repeated ticks on the same
/// milestone a no-op.
fn apply_difficulty_ramp(state: &mut GameState, cfg: &Config) {
    if state.miles_covered == 0 {
        return;
    }
    let milestone = state.miles_covered / cfg.difficulty_milestone_miles;
    if milestone > state.last_difficulty_milestone {
        state.obstacle_speed += cfg.obstacle_speed_step;
        state.obstacle_spawn_interval_ms = (state.obstacle_spawn_interval_ms
            - cfg.obstacle_interval_step_ms)
            .max(cfg.min_obstacle_spawn_interval_ms);
        state.pizza_spawn_interval_ms = (state.pizza_spawn_interval_ms
            - cfg.pizza_interval_step_ms)
            .max(cfg.min_pizza_spawn_interval_ms);
        state.last_difficulty_milestone = milestone;
        log::info!(
            "difficulty up at {} miles: speed {:.1}, spawn intervals {:.0}/{:.0}ms",
            state.miles_covered,
            state.obstacle_speed,
            state.obstacle_spawn_interval_ms,
            state.pizza_spawn_interval_ms
        );
    }
}

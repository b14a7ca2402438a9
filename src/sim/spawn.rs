//! Procedural entity spawner
//!
//! Each entity type has its own wall-clock gate: once more running time has
//! elapsed since its last spawn than its current interval, one entity is
//! emitted just beyond the right edge of the viewport. The difficulty ramp
//! shrinks the intervals over a run. There is no cap on live entities; the
//! left-edge cull in the tick is the only removal path besides collection
//! and stomps.

use rand::Rng;

use crate::config::Config;

use super::state::{GameState, Obstacle, ObstacleColor, Pickup};

/// Evaluate both spawn gates for the current tick
pub fn run_spawners(state: &mut GameState, cfg: &Config) {
    if state.run_time_ms - state.last_obstacle_spawn_ms > state.obstacle_spawn_interval_ms {
        spawn_obstacle(state, cfg);
        state.last_obstacle_spawn_ms = state.run_time_ms;
    }
    if state.run_time_ms - state.last_pizza_spawn_ms > state.pizza_spawn_interval_ms {
        spawn_pizza(state, cfg);
        state.last_pizza_spawn_ms = state.run_time_ms;
    }
}

/// Random sample in `[min, max)`, degenerating to `min` when the bounds meet
fn sample(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if min < max { rng.random_range(min..max) } else { min }
}

/// Emit one obstacle just off the right edge.
///
/// 70% rest on the floor line; the rest float with a guaranteed gap of at
/// least the player's height beneath them, so a ground path always remains.
fn spawn_obstacle(state: &mut GameState, cfg: &Config) {
    let width = sample(&mut state.rng, cfg.obstacle_min_width, cfg.obstacle_max_width);
    let height = sample(
        &mut state.rng,
        cfg.obstacle_min_height,
        cfg.obstacle_max_height,
    );

    let grounded = state.rng.random_bool(cfg.ground_obstacle_chance);
    let y = if grounded {
        cfg.view_height - height
    } else {
        let base = cfg.view_height - height - cfg.player_height;
        let lift = sample(&mut state.rng, 0.0, cfg.player_height * 1.2);
        (base - lift).max(0.0)
    };

    let scroll_x = state.world_scroll_x(cfg);
    let world_x = scroll_x + cfg.view_width + sample(&mut state.rng, 0.0, 100.0);

    let color = ObstacleColor::ALL[state.rng.random_range(0..ObstacleColor::ALL.len())];
    let id = state.next_entity_id();
    log::debug!("spawn obstacle #{id} {width:.0}x{height:.0} at world x {world_x:.0}");

    state.obstacles.push(Obstacle {
        id,
        world_x,
        y,
        width,
        height,
        color,
    });
}

/// Emit one pizza just off the right edge, in a band the player can reach
/// with a normal jump and never flush with the ground. The spawn offset is
/// larger than the obstacle one so the two streams do not cluster.
fn spawn_pizza(state: &mut GameState, cfg: &Config) {
    let min_y = cfg.player_height * 0.7;
    let max_y = cfg.ground_y() - cfg.pizza_height - cfg.player_height * 0.5;
    let y = sample(&mut state.rng, min_y, max_y).clamp(min_y, max_y.max(min_y));

    let scroll_x = state.world_scroll_x(cfg);
    let world_x = scroll_x + cfg.view_width + sample(&mut state.rng, 0.0, 200.0) + 50.0;

    let id = state.next_entity_id();
    log::debug!("spawn pizza #{id} at world x {world_x:.0}, y {y:.0}");

    state.pickups.push(Pickup {
        id,
        world_x,
        y,
        width: cfg.pizza_width,
        height: cfg.pizza_height,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scroll;

    fn spawn_many(seed: u64, n: usize) -> (GameState, Config) {
        let cfg = Config::default();
        let mut state = GameState::new(&cfg, seed);
        for _ in 0..n {
            spawn_obstacle(&mut state, &cfg);
            spawn_pizza(&mut state, &cfg);
        }
        (state, cfg)
    }

    #[test]
    fn test_obstacle_invariants_hold_over_many_spawns() {
        let (state, cfg) = spawn_many(42, 500);
        for obs in &state.obstacles {
            assert!(obs.width >= cfg.obstacle_min_width && obs.width <= cfg.obstacle_max_width);
            assert!(obs.height >= cfg.obstacle_min_height && obs.height <= cfg.obstacle_max_height);
            assert!(obs.y >= 0.0);
            // Never fully above the visible band
            assert!(obs.y + obs.height <= cfg.view_height + 0.001);
        }
    }

    #[test]
    fn test_floating_obstacles_leave_a_ground_gap() {
        let (state, cfg) = spawn_many(7, 500);
        for obs in &state.obstacles {
            let gap_below = cfg.view_height - (obs.y + obs.height);
            // Either resting on the floor or leaving at least a player-height gap
            assert!(
                gap_below <= 0.001 || gap_below >= cfg.player_height - 0.001,
                "impassable gap of {gap_below} under obstacle #{}",
                obs.id
            );
        }
    }

    #[test]
    fn test_entities_spawn_off_screen_right() {
        let (state, cfg) = spawn_many(3, 200);
        let scroll_x = state.world_scroll_x(&cfg);
        for obs in &state.obstacles {
            assert!(scroll::screen_x(obs.world_x, scroll_x) >= cfg.view_width);
        }
        for pickup in &state.pickups {
            assert!(scroll::screen_x(pickup.world_x, scroll_x) >= cfg.view_width);
        }
    }

    #[test]
    fn test_pizzas_stay_in_reachable_band() {
        let (state, cfg) = spawn_many(11, 500);
        let min_y = cfg.player_height * 0.7;
        let max_y = cfg.ground_y() - cfg.pizza_height - cfg.player_height * 0.5;
        for pickup in &state.pickups {
            assert!(pickup.y >= min_y && pickup.y <= max_y);
        }
    }

    #[test]
    fn test_gates_respect_intervals() {
        let cfg = Config::default();
        let mut state = GameState::new(&cfg, 99);

        // Just under the obstacle interval: nothing spawns
        state.run_time_ms = cfg.initial_obstacle_spawn_interval_ms;
        run_spawners(&mut state, &cfg);
        assert!(state.obstacles.is_empty());
        assert!(state.pickups.is_empty());

        // Past it: exactly one obstacle, pizzas still gated
        state.run_time_ms = cfg.initial_obstacle_spawn_interval_ms + 1.0;
        run_spawners(&mut state, &cfg);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.pickups.is_empty());

        // Past the pizza interval too
        state.run_time_ms = cfg.initial_pizza_spawn_interval_ms + 1.0;
        run_spawners(&mut state, &cfg);
        assert_eq!(state.pickups.len(), 1);
    }

    #[test]
    fn test_same_seed_same_spawn_stream() {
        let (a, _) = spawn_many(1234, 50);
        let (b, _) = spawn_many(1234, 50);
        for (x, y) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(x.world_x, y.world_x);
            assert_eq!(x.y, y.y);
            assert_eq!(x.width, y.width);
            assert_eq!(x.color, y.color);
        }
    }
}

//! Property tests for the run invariants that must hold across any input
//! sequence: the ground clamp, the single mid-air boost, monotonic
//! difficulty, off-screen culling, and full restart resets.

use proptest::prelude::*;

use pizza_dash::sim::{scroll, tick};
use pizza_dash::{Config, FrameInput, Game, GameState, Phase};

/// One frame of random input plus its wall-clock delta
fn frame() -> impl Strategy<Value = (FrameInput, f64)> {
    (
        any::<bool>(),
        any::<bool>(),
        prop::bool::weighted(0.2),
        prop::bool::weighted(0.03),
        1.0..120.0f64,
    )
        .prop_map(|(left, right, jump, pause, dt)| {
            (
                FrameInput {
                    left,
                    right,
                    jump,
                    pause,
                },
                dt,
            )
        })
}

fn frames() -> impl Strategy<Value = Vec<(FrameInput, f64)>> {
    prop::collection::vec(frame(), 1..400)
}

proptest! {
    #[test]
    fn ground_clamp_always_holds(seed in any::<u64>(), inputs in frames()) {
        let cfg = Config::default();
        let mut state = GameState::new(&cfg, seed);
        for (input, dt) in inputs {
            tick(&mut state, &input, dt, &cfg);
            prop_assert!(state.player.y <= cfg.ground_y());
            if state.player.y == cfg.ground_y() {
                prop_assert_eq!(state.player.vel_y, 0.0);
                prop_assert!(!state.player.is_jumping);
            }
        }
    }

    #[test]
    fn at_most_one_boost_per_airtime(seed in any::<u64>(), inputs in frames()) {
        let cfg = Config::default();
        let mut state = GameState::new(&cfg, seed);
        let mut boosts_this_airtime = 0u32;
        for (input, dt) in inputs {
            // Keep hazards out of the way so every velocity change is pure
            // jump/boost/gravity arithmetic
            state.obstacles.clear();
            let was_airborne = state.player.is_jumping;
            let vel_before = state.player.vel_y;

            tick(&mut state, &input, dt, &cfg);

            if !state.player.is_jumping {
                boosts_this_airtime = 0;
                continue;
            }
            if was_airborne && input.jump {
                let dv = state.player.vel_y - vel_before;
                let boost_dv = cfg.jump_boost_strength + cfg.gravity;
                if (dv - boost_dv).abs() < 1e-4 {
                    boosts_this_airtime += 1;
                    // Boosts only ever fire while still ascending
                    prop_assert!(vel_before < 0.0);
                }
            }
            prop_assert!(boosts_this_airtime <= 1);
        }
    }

    #[test]
    fn difficulty_never_relaxes(seed in any::<u64>(), inputs in frames()) {
        let cfg = Config::default();
        let mut state = GameState::new(&cfg, seed);
        for (input, dt) in inputs {
            let speed = state.obstacle_speed;
            let obstacle_interval = state.obstacle_spawn_interval_ms;
            let pizza_interval = state.pizza_spawn_interval_ms;

            tick(&mut state, &input, dt, &cfg);

            prop_assert!(state.obstacle_speed >= speed);
            prop_assert!(state.obstacle_spawn_interval_ms <= obstacle_interval);
            prop_assert!(state.pizza_spawn_interval_ms <= pizza_interval);
            prop_assert!(state.obstacle_spawn_interval_ms >= cfg.min_obstacle_spawn_interval_ms);
            prop_assert!(state.pizza_spawn_interval_ms >= cfg.min_pizza_spawn_interval_ms);
        }
    }

    #[test]
    fn stale_entities_always_culled(seed in any::<u64>(), inputs in frames()) {
        let cfg = Config::default();
        let mut state = GameState::new(&cfg, seed);
        for (input, dt) in inputs {
            tick(&mut state, &input, dt, &cfg);
            let scroll_x = state.world_scroll_x(&cfg);
            for obs in &state.obstacles {
                prop_assert!(scroll::screen_x(obs.world_x, scroll_x) + obs.width > 0.0);
            }
            for p in &state.pickups {
                prop_assert!(scroll::screen_x(p.world_x, scroll_x) + p.width > 0.0);
            }
        }
    }

    #[test]
    fn restart_resets_regardless_of_history(seed in any::<u64>(), inputs in frames()) {
        let cfg = Config::default();
        let mut game = Game::with_seed(cfg.clone(), seed).unwrap();
        let mut now = 0.0;
        for (input, dt) in inputs {
            game.input_mut().hold_left(input.left);
            game.input_mut().hold_right(input.right);
            if input.jump {
                game.trigger_jump();
            }
            if input.pause {
                game.toggle_pause();
            }
            now += dt;
            game.on_frame(now);
        }

        game.restart();
        let snap = game.snapshot();
        prop_assert_eq!(snap.phase, Phase::Running);
        prop_assert_eq!(snap.pizzas_collected, 0);
        prop_assert_eq!(snap.miles_covered, 0);
        prop_assert!(snap.obstacles.is_empty());
        prop_assert!(snap.pickups.is_empty());
        prop_assert_eq!(snap.player.y, cfg.ground_y());
        prop_assert_eq!(game.state().obstacle_speed, cfg.initial_obstacle_speed);
        prop_assert_eq!(
            game.state().obstacle_spawn_interval_ms,
            cfg.initial_obstacle_spawn_interval_ms
        );
    }
}

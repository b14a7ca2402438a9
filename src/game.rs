//! Game facade
//!
//! The one type a presentation layer talks to. It owns the validated config,
//! the simulation state and the input latch, advances everything from
//! `on_frame` timestamps, and publishes read-only screen-space snapshots.
//! Input entry points only write into the latch, so handler calls land
//! strictly between ticks and can never interleave with one.

use serde::Serialize;

use crate::config::{Config, ConfigError};
use crate::input::{HorizontalDir, InputLatch};
use crate::sim::state::ObstacleColor;
use crate::sim::{self, GameState, Phase, scroll};

/// Player render state: fixed screen column, live vertical position
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub is_jumping: bool,
    pub is_moving: bool,
    pub animation_frame: u8,
}

/// One visible obstacle in screen coordinates
#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: ObstacleColor,
}

/// One visible pizza in screen coordinates
#[derive(Debug, Clone, Serialize)]
pub struct PickupView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only render snapshot; off-screen entities are already filtered out
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub pizzas_collected: u32,
    pub miles_covered: u32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub pickups: Vec<PickupView>,
    /// Tiling offset for a repeat-x background of viewport width
    pub background_offset: f32,
}

/// The simulation core behind the external interface
#[derive(Debug)]
pub struct Game {
    cfg: Config,
    state: GameState,
    latch: InputLatch,
    last_frame_ms: Option<f64>,
}

impl Game {
    /// Build a game with a host-chosen seed. Fails fast on invalid config.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        Self::with_seed(cfg, rand::random())
    }

    /// Seeded constructor for reproducible runs and tests
    pub fn with_seed(cfg: Config, seed: u64) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let state = GameState::new(&cfg, seed);
        Ok(Self {
            cfg,
            state,
            latch: InputLatch::new(),
            last_frame_ms: None,
        })
    }

    /// Advance one tick. `timestamp_ms` is the host's monotonic frame time;
    /// the first call only anchors the clock (zero delta), so calling this
    /// before any explicit restart is well-defined.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        let dt_ms = match self.last_frame_ms {
            Some(prev) => (timestamp_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);

        let input = self.latch.drain();
        sim::tick(&mut self.state, &input, dt_ms, &self.cfg);
    }

    // === Input entry points (latched, applied between ticks) ===

    pub fn set_horizontal_input(&mut self, dir: HorizontalDir) {
        self.latch.set_horizontal(dir);
    }

    /// Edge-triggered jump; duplicate triggers before the next tick collapse
    pub fn trigger_jump(&mut self) {
        self.latch.trigger_jump();
    }

    pub fn toggle_pause(&mut self) {
        self.latch.toggle_pause();
    }

    /// Full reset to start-of-run state; the only way out of game over
    pub fn restart(&mut self) {
        log::info!("restart");
        self.state.reset(&self.cfg);
        self.latch.clear();
    }

    /// Direct latch access for key-level hosts (both directions holdable)
    pub fn input_mut(&mut self) -> &mut InputLatch {
        &mut self.latch
    }

    // === Read-only accessors ===

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Publish the current render state. Entity positions are mapped into the
    /// screen frame and filtered to the visible band.
    pub fn snapshot(&self) -> Snapshot {
        let cfg = &self.cfg;
        let state = &self.state;
        let scroll_x = state.world_scroll_x(cfg);

        let obstacles = state
            .obstacles
            .iter()
            .filter_map(|obs| {
                let x = scroll::screen_x(obs.world_x, scroll_x);
                scroll::is_visible(x, obs.width, cfg.view_width).then(|| ObstacleView {
                    x,
                    y: obs.y,
                    width: obs.width,
                    height: obs.height,
                    color: obs.color,
                })
            })
            .collect();

        let pickups = state
            .pickups
            .iter()
            .filter_map(|p| {
                let x = scroll::screen_x(p.world_x, scroll_x);
                scroll::is_visible(x, p.width, cfg.view_width).then(|| PickupView {
                    x,
                    y: p.y,
                    width: p.width,
                    height: p.height,
                })
            })
            .collect();

        Snapshot {
            phase: state.phase,
            pizzas_collected: state.pizzas_collected,
            miles_covered: state.miles_covered,
            player: PlayerView {
                x: cfg.player_screen_x,
                y: state.player.y,
                width: cfg.player_width,
                height: cfg.player_height,
                is_jumping: state.player.is_jumping,
                is_moving: state.player.is_moving_horizontally,
                animation_frame: state.player.animation_frame,
            },
            obstacles,
            pickups,
            background_offset: scroll::background_offset(scroll_x, cfg.view_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    fn game() -> Game {
        Game::with_seed(Config::default(), 42).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let cfg = Config {
            player_width: -48.0,
            ..Default::default()
        };
        assert!(Game::new(cfg).is_err());
    }

    #[test]
    fn test_first_frame_is_well_defined() {
        let mut g = game();
        // Large host timestamp on the very first frame: no fast-forward
        g.on_frame(1_000_000.0);
        assert_eq!(g.state().miles_covered, 0);
        assert!(g.state().obstacles.is_empty());
        assert_eq!(g.snapshot().phase, Phase::Running);
    }

    #[test]
    fn test_frames_advance_the_run(){
        let mut g = game();
        let mut now = 0.0;
        for _ in 0..120 {
            g.on_frame(now);
            now += 1000.0 / 60.0;
        }
        assert!(g.state().miles_covered > 0);
    }

    #[test]
    fn test_jump_trigger_between_frames() {
        let mut g = game();
        g.on_frame(0.0);
        g.trigger_jump();
        g.trigger_jump(); // held key repeat must not double-apply
        g.on_frame(16.0);
        let cfg = Config::default();
        assert!((g.state().player.vel_y - (cfg.jump_strength + cfg.gravity)).abs() < 1e-4);
    }

    #[test]
    fn test_restart_resets_fully() {
        let mut g = game();
        let mut now = 0.0;
        g.set_horizontal_input(HorizontalDir::Right);
        for _ in 0..600 {
            g.on_frame(now);
            now += 1000.0 / 60.0;
        }

        g.restart();
        let snap = g.snapshot();
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.pizzas_collected, 0);
        assert_eq!(snap.miles_covered, 0);
        assert!(snap.obstacles.is_empty() && snap.pickups.is_empty());
        assert_eq!(g.state().player.world_x, g.config().player_screen_x);
        assert_eq!(g.state().obstacle_speed, g.config().initial_obstacle_speed);
        // Held input does not leak across a restart
        g.on_frame(now);
        assert!(!g.state().player.is_moving_horizontally);
    }

    #[test]
    fn test_restart_leaves_game_over() {
        let mut g = game();
        g.on_frame(0.0);
        // Plant an obstacle on the player and tick into it
        g.state.obstacles.push(Obstacle {
            id: 999,
            world_x: 120.0,
            y: 310.0,
            width: 40.0,
            height: 40.0,
            color: crate::sim::ObstacleColor::Three,
        });
        g.on_frame(16.0);
        assert_eq!(g.snapshot().phase, Phase::GameOver);

        g.restart();
        assert_eq!(g.snapshot().phase, Phase::Running);
    }

    #[test]
    fn test_snapshot_filters_off_screen_entities() {
        let mut g = game();
        g.state.obstacles.push(Obstacle {
            id: 1,
            world_x: 5_000.0, // far off to the right
            y: 310.0,
            width: 40.0,
            height: 40.0,
            color: crate::sim::ObstacleColor::One,
        });
        g.state.obstacles.push(Obstacle {
            id: 2,
            world_x: 300.0, // visible
            y: 310.0,
            width: 40.0,
            height: 40.0,
            color: crate::sim::ObstacleColor::Two,
        });
        let snap = g.snapshot();
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].x, 300.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let g = game();
        let json = serde_json::to_string(&g.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
    }
}

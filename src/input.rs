//! Input latch
//!
//! Decouples the host's event callbacks from the simulation tick. Held
//! movement keys are level-triggered; jump and pause are edge-triggered
//! one-shots that are consumed by the next tick. Duplicate triggers between
//! two ticks collapse into one, so a key-repeat storm can never double-apply
//! an impulse.

/// Held horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalDir {
    Left,
    Right,
    #[default]
    None,
}

/// Input consumed by a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pause: bool,
}

/// Accumulates input events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    left_held: bool,
    right_held: bool,
    jump_pending: bool,
    pause_pending: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held direction (single-direction hosts such as touch UIs)
    pub fn set_horizontal(&mut self, dir: HorizontalDir) {
        self.left_held = dir == HorizontalDir::Left;
        self.right_held = dir == HorizontalDir::Right;
    }

    /// Key-level interface: both directions may be held at once (net zero)
    pub fn hold_left(&mut self, held: bool) {
        self.left_held = held;
    }

    pub fn hold_right(&mut self, held: bool) {
        self.right_held = held;
    }

    /// Queue a jump for the next tick. Idempotent until consumed.
    pub fn trigger_jump(&mut self) {
        self.jump_pending = true;
    }

    /// Queue a pause toggle for the next tick. Idempotent until consumed.
    pub fn toggle_pause(&mut self) {
        self.pause_pending = true;
    }

    /// Take the input for one tick, clearing one-shot events
    pub fn drain(&mut self) -> FrameInput {
        let input = FrameInput {
            left: self.left_held,
            right: self.right_held,
            jump: self.jump_pending,
            pause: self.pause_pending,
        };
        self.jump_pending = false;
        self.pause_pending = false;
        input
    }

    /// Release everything (on restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

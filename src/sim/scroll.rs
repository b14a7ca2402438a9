//! World scroll model
//!
//! Entities live in unbounded world coordinates; the player is rendered at a
//! fixed screen column. A single derived scalar maps between the two frames:
//! `world_scroll_x = player.world_x - player_screen_x`, and any world x
//! becomes a screen x by subtracting it. Pure functions, no state.

/// Derived scroll offset for the current player position
#[inline]
pub fn world_scroll_x(player_world_x: f32, player_screen_x: f32) -> f32 {
    player_world_x - player_screen_x
}

/// Map a world x coordinate into the screen frame
#[inline]
pub fn screen_x(world_x: f32, scroll_x: f32) -> f32 {
    world_x - scroll_x
}

/// Whether a rect at `screen_x` with `width` intersects the viewport
#[inline]
pub fn is_visible(screen_x: f32, width: f32, view_width: f32) -> bool {
    screen_x + width > 0.0 && screen_x < view_width
}

/// Tiling offset for a repeat-x background texture of viewport width
#[inline]
pub fn background_offset(scroll_x: f32, view_width: f32) -> f32 {
    scroll_x.rem_euclid(view_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_derivation() {
        // Player at its start column: no scroll
        assert_eq!(world_scroll_x(100.0, 100.0), 0.0);
        // Player advanced 250 world units
        assert_eq!(world_scroll_x(350.0, 100.0), 250.0);
    }

    #[test]
    fn test_screen_mapping_round_trip() {
        let scroll = world_scroll_x(350.0, 100.0);
        // An entity spawned at world 950 sits at screen 700
        assert_eq!(screen_x(950.0, scroll), 700.0);
        // The player's own world position maps back to its fixed column
        assert_eq!(screen_x(350.0, scroll), 100.0);
    }

    #[test]
    fn test_visibility_band() {
        let w = 600.0;
        assert!(is_visible(0.0, 30.0, w));
        assert!(is_visible(599.0, 30.0, w)); // poking in from the right
        assert!(is_visible(-29.0, 30.0, w)); // poking in from the left
        assert!(!is_visible(-30.0, 30.0, w)); // fully past the left edge
        assert!(!is_visible(600.0, 30.0, w)); // not yet on screen
    }

    #[test]
    fn test_background_offset_wraps() {
        assert_eq!(background_offset(0.0, 600.0), 0.0);
        assert_eq!(background_offset(650.0, 600.0), 50.0);
        // Negative scroll cannot happen in play (world_x is clamped), but the
        // offset still stays within [0, width)
        assert_eq!(background_offset(-50.0, 600.0), 550.0);
    }
}

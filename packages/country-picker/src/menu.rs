//! Dropdown placement for the country picker.
//!
//! Given the trigger's on-screen rectangle and the viewport size, compute
//! where a fixed-width menu opens so it never overflows the screen,
//! preferring to open below the trigger. Nothing is cached between opens:
//! the anchor can move (scroll, rotation), so callers measure and recompute
//! on every open event.

use serde::{Deserialize, Serialize};

/// Screen rectangle of the trigger control, measured when the menu opens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Visible window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Fixed menu metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub menu_width: f64,
    pub row_height: f64,
    /// Rows visible before the list scrolls.
    pub max_rows: usize,
    /// Vertical margin between menu, anchor, and screen edges.
    pub v_gap: f64,
    /// Horizontal margin between menu and screen edges.
    pub h_gap: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            menu_width: 260.0,
            row_height: 48.0,
            max_rows: 8,
            v_gap: 8.0,
            h_gap: 8.0,
        }
    }
}

/// Computed placement for one open event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuPosition {
    pub top: f64,
    pub left: f64,
    pub max_menu_height: f64,
}

/// Place the menu near the anchor, fully on screen.
///
/// Height is capped at `max_rows` rows or 60 % of the viewport, whichever is
/// smaller. Horizontally the menu hugs the anchor's left edge, clamped inside
/// the `h_gap` margins. It opens below the anchor unless its bottom would
/// cross the lower margin, in which case it opens above.
pub fn compute_menu_position(
    anchor: AnchorRect,
    viewport: Viewport,
    config: &MenuConfig,
) -> MenuPosition {
    let max_menu_height =
        (config.row_height * config.max_rows as f64).min((viewport.height * 0.6).floor());
    let left = anchor
        .x
        .max(config.h_gap)
        .min(viewport.width - config.menu_width - config.h_gap);
    let open_down_top = anchor.y + anchor.h + config.v_gap;
    let open_up_top = (anchor.y - max_menu_height - config.v_gap).max(config.v_gap);
    let top = if open_down_top + max_menu_height > viewport.height - config.v_gap {
        open_up_top
    } else {
        open_down_top
    };
    MenuPosition {
        top,
        left,
        max_menu_height,
    }
}

/// Scroll offset that puts row `index` at the top of the list viewport.
///
/// Used to jump (without animation) to the current selection once per open
/// event; the jump itself is the caller's side effect.
pub fn row_offset(index: usize, config: &MenuConfig) -> f64 {
    config.row_height * index as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            width: 400.0,
            height: 800.0,
        }
    }

    #[test]
    fn test_opens_upward_when_below_would_overflow() {
        let anchor = AnchorRect {
            x: 300.0,
            y: 700.0,
            w: 50.0,
            h: 40.0,
        };
        let pos = compute_menu_position(anchor, viewport(), &MenuConfig::default());
        assert_eq!(pos.max_menu_height, 384.0, "8 rows of 48 beat the 60% cap");
        assert_eq!(pos.top, 308.0, "700 - 384 - 8");
        assert_eq!(pos.left, 132.0, "clamped to 400 - 260 - 8");
    }

    #[test]
    fn test_opens_downward_when_room_allows() {
        let anchor = AnchorRect {
            x: 20.0,
            y: 100.0,
            w: 50.0,
            h: 40.0,
        };
        let pos = compute_menu_position(anchor, viewport(), &MenuConfig::default());
        assert_eq!(pos.top, 148.0, "anchor bottom plus the vertical gap");
        assert_eq!(pos.left, 20.0, "anchor.x already inside the margins");
    }

    #[test]
    fn test_height_capped_at_sixty_percent_of_short_viewports() {
        let anchor = AnchorRect {
            x: 0.0,
            y: 10.0,
            w: 50.0,
            h: 40.0,
        };
        let short = Viewport {
            width: 400.0,
            height: 500.0,
        };
        let pos = compute_menu_position(anchor, short, &MenuConfig::default());
        assert_eq!(pos.max_menu_height, 300.0, "floor(500 * 0.6) < 384");
    }

    #[test]
    fn test_left_stays_within_horizontal_margins() {
        let config = MenuConfig::default();
        let lo = config.h_gap;
        let hi = viewport().width - config.menu_width - config.h_gap;
        for x in [-500.0, -1.0, 0.0, 50.0, 132.0, 300.0, 1000.0] {
            let anchor = AnchorRect {
                x,
                y: 100.0,
                w: 50.0,
                h: 40.0,
            };
            let pos = compute_menu_position(anchor, viewport(), &config);
            assert!(
                pos.left >= lo && pos.left <= hi,
                "left {} out of [{lo}, {hi}] for anchor.x {x}",
                pos.left
            );
        }
    }

    #[test]
    fn test_upward_top_never_crosses_the_top_margin() {
        let anchor = AnchorRect {
            x: 0.0,
            y: 790.0,
            w: 50.0,
            h: 10.0,
        };
        let short = Viewport {
            width: 400.0,
            height: 800.0,
        };
        let config = MenuConfig {
            max_rows: 100,
            ..MenuConfig::default()
        };
        let pos = compute_menu_position(anchor, short, &config);
        assert_eq!(pos.max_menu_height, 480.0);
        assert_eq!(pos.top, 302.0, "790 - 480 - 8 still above the margin");

        let near_top = AnchorRect {
            x: 0.0,
            y: 300.0,
            w: 50.0,
            h: 10.0,
        };
        let pos = compute_menu_position(near_top, short, &config);
        assert_eq!(pos.top, 8.0, "clamped to v_gap when the anchor sits high");
    }

    #[test]
    fn test_row_offset_is_linear_in_the_index() {
        let config = MenuConfig::default();
        assert_eq!(row_offset(0, &config), 0.0);
        assert_eq!(row_offset(3, &config), 144.0);
    }
}

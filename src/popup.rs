//! Placement of the zoom popup relative to the entry and the monitor.

/// An axis-aligned rectangle in screen (root window) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Reading direction of the widget; decides which edge the popup aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Everything needed to place the popup, gathered fresh for each popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenGeometry {
    /// The entry's rectangle in screen coordinates.
    pub widget_rect: ScreenRect,
    /// The popup's preferred size.
    pub popup_size: Size,
    /// Work area of the monitor showing the widget.
    pub monitor_work_area: ScreenRect,
    pub text_direction: TextDirection,
}

/// Top-left corner of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupAnchor {
    pub x: i32,
    pub y: i32,
    /// Whether the toolkit should push the popup inside the screen. Always
    /// false: the vertical position may leave the monitor.
    pub forced_inside_screen: bool,
}

/// Computes where to put the popup.
///
/// The popup prefers to open below the widget, aligned to its leading edge,
/// and is kept horizontally inside the monitor. If it fits neither below nor
/// above, it opens on whichever side has more room (above on a tie).
///
/// Negative sizes are a caller error.
pub fn compute_anchor(geometry: &ScreenGeometry) -> PopupAnchor {
    let widget = geometry.widget_rect;
    let popup = geometry.popup_size;
    let monitor = geometry.monitor_work_area;

    let mut x = match geometry.text_direction {
        TextDirection::Ltr => widget.x,
        TextDirection::Rtl => widget.right() - popup.width,
    };

    if x < monitor.x {
        x = monitor.x;
    } else if x + popup.width > monitor.right() {
        x = monitor.right() - popup.width;
    }

    let space_below = monitor.bottom() - widget.bottom();
    let space_above = widget.y - monitor.y;

    let below = widget.bottom();
    let above = widget.y - popup.height;

    let y = if space_below >= popup.height {
        below
    } else if space_above >= popup.height {
        above
    } else if space_below > space_above {
        below
    } else {
        above
    };

    PopupAnchor {
        x,
        y,
        forced_inside_screen: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONITOR: ScreenRect = ScreenRect::new(0, 0, 1920, 1080);

    fn geometry(widget_rect: ScreenRect, popup_size: Size, dir: TextDirection) -> ScreenGeometry {
        ScreenGeometry {
            widget_rect,
            popup_size,
            monitor_work_area: MONITOR,
            text_direction: dir,
        }
    }

    #[test]
    fn test_opens_below_with_room() {
        let anchor = compute_anchor(&geometry(
            ScreenRect::new(100, 50, 120, 30),
            Size::new(120, 400),
            TextDirection::Ltr,
        ));
        assert_eq!(anchor.x, 100);
        assert_eq!(anchor.y, 80);
        assert!(!anchor.forced_inside_screen);
    }

    #[test]
    fn test_rtl_aligns_right_edges() {
        let anchor = compute_anchor(&geometry(
            ScreenRect::new(500, 50, 120, 30),
            Size::new(200, 400),
            TextDirection::Rtl,
        ));
        assert_eq!(anchor.x, 420);
        assert_eq!(anchor.x + 200, 620);
    }

    #[test]
    fn test_clamps_to_right_monitor_edge() {
        for dir in [TextDirection::Ltr, TextDirection::Rtl] {
            let anchor = compute_anchor(&geometry(
                ScreenRect::new(1860, 50, 60, 30),
                Size::new(200, 400),
                dir,
            ));
            assert_eq!(anchor.x + 200, MONITOR.right(), "{dir:?}");
        }
    }

    #[test]
    fn test_clamps_to_left_monitor_edge() {
        let anchor = compute_anchor(&geometry(
            ScreenRect::new(10, 50, 60, 30),
            Size::new(200, 400),
            TextDirection::Rtl,
        ));
        assert_eq!(anchor.x, 0);
    }

    #[test]
    fn test_flips_above_at_monitor_bottom() {
        let anchor = compute_anchor(&geometry(
            ScreenRect::new(100, 1050, 120, 30),
            Size::new(120, 400),
            TextDirection::Ltr,
        ));
        assert_eq!(anchor.y, 650);
    }

    #[test]
    fn test_fits_nowhere_prefers_larger_side() {
        let popup = Size::new(120, 1000);

        let anchor = compute_anchor(&geometry(
            ScreenRect::new(100, 200, 120, 30),
            popup,
            TextDirection::Ltr,
        ));
        assert_eq!(anchor.y, 230);

        let anchor = compute_anchor(&geometry(
            ScreenRect::new(100, 800, 120, 30),
            popup,
            TextDirection::Ltr,
        ));
        assert_eq!(anchor.y, -200);
    }

    #[test]
    fn test_fits_nowhere_tie_goes_above() {
        // 525 above, 525 below: not strictly more room below.
        let anchor = compute_anchor(&geometry(
            ScreenRect::new(100, 525, 120, 30),
            Size::new(120, 1000),
            TextDirection::Ltr,
        ));
        assert_eq!(anchor.y, -475);
    }

    #[test]
    fn test_offset_monitor() {
        let anchor = compute_anchor(&ScreenGeometry {
            widget_rect: ScreenRect::new(1930, 2100, 100, 30),
            popup_size: Size::new(100, 200),
            monitor_work_area: ScreenRect::new(1920, 1080, 1280, 1024),
            text_direction: TextDirection::Ltr,
        });
        assert_eq!(anchor.x, 1930);
        assert_eq!(anchor.y, 1900);
    }
}

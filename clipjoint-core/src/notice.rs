//! Transient user feedback and where the HUD that shows it goes
use std::fmt;

use crate::geometry::{Point, Rect, Size};

/// Gap between the pointer and the top of the HUD
const POINTER_OFFSET: f64 = 28.0;

/// Minimum distance between the HUD and the edges of the visible frame
const EDGE_MARGIN: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Copied,
    ClipAdded,
    ClipLimitReached,
    ClipboardHasNoText,
    Message(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Copied => "Copied",
            Notice::ClipAdded => "Clip Added",
            Notice::ClipLimitReached => "Clip limit reached",
            Notice::ClipboardHasNoText => "Clipboard has no text",
            Notice::Message(message) => message,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Bottom-left origin for a HUD of `size`, centered under the pointer and kept
/// inside `visible_frame`
pub fn hud_origin(pointer: Point, size: Size, visible_frame: Rect) -> Point {
    let proposed_x = pointer.x - size.width / 2.0;
    let proposed_y = pointer.y - size.height - POINTER_OFFSET;

    let min_x = visible_frame.min_x() + EDGE_MARGIN;
    let max_x = visible_frame.max_x() - size.width - EDGE_MARGIN;
    let min_y = visible_frame.min_y() + EDGE_MARGIN;
    let max_y = visible_frame.max_y() - size.height - EDGE_MARGIN;

    // Not clamp(): min > max when the HUD is larger than the frame
    Point::new(proposed_x.max(min_x).min(max_x), proposed_y.max(min_y).min(max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Rect = Rect {
        origin: Point { x: 0.0, y: 0.0 },
        size: Size {
            width: 1000.0,
            height: 800.0,
        },
    };

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::Copied.to_string(), "Copied");
        assert_eq!(Notice::ClipAdded.to_string(), "Clip Added");
        assert_eq!(Notice::ClipLimitReached.to_string(), "Clip limit reached");
        assert_eq!(Notice::ClipboardHasNoText.to_string(), "Clipboard has no text");
        assert_eq!(Notice::Message("Saved".into()).to_string(), "Saved");
    }

    #[test]
    fn test_hud_centered_below_pointer() {
        let origin = hud_origin(Point::new(500.0, 400.0), Size::new(140.0, 46.0), FRAME);
        assert_eq!(origin, Point::new(430.0, 326.0));
    }

    #[test]
    fn test_hud_clamped_to_visible_frame() {
        let size = Size::new(140.0, 46.0);

        let near_left_bottom = hud_origin(Point::new(5.0, 10.0), size, FRAME);
        assert_eq!(near_left_bottom, Point::new(12.0, 12.0));

        let near_right_top = hud_origin(Point::new(995.0, 2000.0), size, FRAME);
        assert_eq!(near_right_top, Point::new(848.0, 742.0));
    }

    #[test]
    fn test_oversized_hud_does_not_panic() {
        let origin = hud_origin(Point::new(500.0, 400.0), Size::new(2000.0, 46.0), FRAME);
        assert_eq!(origin.x, 1000.0 - 2000.0 - 12.0);
    }
}

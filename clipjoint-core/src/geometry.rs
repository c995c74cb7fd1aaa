//! Display geometry in AppKit screen coordinates
//!
//! Points are in the global, bottom-left-origin coordinate space that
//! NSScreen and NSEvent report. Every display has a full `frame` and a
//! `visible_frame` that excludes the menu bar and Dock.

use crate::constants::FALLBACK_VISIBLE_HEIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Containment in unflipped screen coordinates: the left and top edges are
    /// inside, the right and bottom edges are not
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y > self.min_y()
            && point.y <= self.max_y()
    }
}

/// One attached screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Display {
    pub frame: Rect,
    pub visible_frame: Rect,
}

/// The display under the pointer, falling back to the primary (first) display
pub fn active_display(displays: &[Display], pointer: Point) -> Option<&Display> {
    displays
        .iter()
        .find(|display| display.frame.contains(pointer))
        .or_else(|| displays.first())
}

/// Visible height of the active display, or a fixed estimate without displays
pub fn usable_height(displays: &[Display], pointer: Point) -> f64 {
    active_display(displays, pointer)
        .map(|display| display.visible_frame.size.height)
        .unwrap_or(FALLBACK_VISIBLE_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_displays() -> Vec<Display> {
        vec![
            Display {
                frame: Rect::new(0.0, 0.0, 1440.0, 900.0),
                visible_frame: Rect::new(0.0, 70.0, 1440.0, 805.0),
            },
            Display {
                frame: Rect::new(1440.0, 0.0, 2560.0, 1440.0),
                visible_frame: Rect::new(1440.0, 0.0, 2560.0, 1415.0),
            },
        ]
    }

    #[test]
    fn test_rect_contains_includes_left_and_top_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 5.0)));
        assert!(rect.contains(Point::new(5.0, 10.0)));
        assert!(rect.contains(Point::new(9.9, 0.1)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, 0.0)));
        assert!(!rect.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn test_pointer_on_top_edge_of_secondary_display() {
        let displays = two_displays();
        let active = active_display(&displays, Point::new(2000.0, 1440.0)).unwrap();
        assert_eq!(active.frame.min_x(), 1440.0);
    }

    #[test]
    fn test_active_display_follows_pointer() {
        let displays = two_displays();
        let active = active_display(&displays, Point::new(2000.0, 700.0)).unwrap();
        assert_eq!(active.frame.min_x(), 1440.0);
    }

    #[test]
    fn test_active_display_falls_back_to_primary() {
        let displays = two_displays();
        let active = active_display(&displays, Point::new(-500.0, -500.0)).unwrap();
        assert_eq!(active.frame.min_x(), 0.0);
    }

    #[test]
    fn test_usable_height() {
        let displays = two_displays();
        assert_eq!(usable_height(&displays, Point::new(100.0, 100.0)), 805.0);
        assert_eq!(usable_height(&displays, Point::new(1500.0, 100.0)), 1415.0);
        assert_eq!(usable_height(&[], Point::default()), 900.0);
    }
}

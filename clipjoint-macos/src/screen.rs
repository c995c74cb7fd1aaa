use clipjoint_core::geometry::{Display, Point, Rect};
use cocoa::base::{id, nil};
use cocoa::foundation::{NSPoint, NSRect};
use objc::{class, msg_send, sel, sel_impl};

fn rect(frame: NSRect) -> Rect {
    Rect::new(frame.origin.x, frame.origin.y, frame.size.width, frame.size.height)
}

/// Attached screens, primary first
pub fn displays() -> Vec<Display> {
    unsafe {
        let screens: id = msg_send![class!(NSScreen), screens];
        if screens == nil {
            return Vec::new();
        }

        let screen_count: usize = msg_send![screens, count];
        (0..screen_count)
            .map(|i| {
                let screen: id = msg_send![screens, objectAtIndex: i];
                let frame: NSRect = msg_send![screen, frame];
                let visible_frame: NSRect = msg_send![screen, visibleFrame];
                Display {
                    frame: rect(frame),
                    visible_frame: rect(visible_frame),
                }
            })
            .collect()
    }
}

/// Current mouse location in global screen coordinates
pub fn pointer_location() -> Point {
    unsafe {
        let location: NSPoint = msg_send![class!(NSEvent), mouseLocation];
        Point::new(location.x, location.y)
    }
}

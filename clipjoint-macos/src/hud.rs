//! Small non-activating panel that flashes feedback near the pointer
use clipjoint_core::geometry::{active_display, Point, Size};
use clipjoint_core::notice::hud_origin;
use cocoa::base::{id, nil, NO, YES};
use cocoa::foundation::{NSPoint, NSRect, NSSize};
use log::debug;
use objc::{class, msg_send, sel, sel_impl};

use crate::foundation::ns_string;
use crate::screen::{displays, pointer_location};

// NSWindowStyleMaskBorderless | NSWindowStyleMaskNonactivatingPanel
const PANEL_STYLE: u64 = 1 << 7;
const BACKING_STORE_BUFFERED: u64 = 2;
const STATUS_WINDOW_LEVEL: i64 = 25;
// canJoinAllSpaces | transient | fullScreenAuxiliary
const COLLECTION_BEHAVIOR: u64 = (1 << 0) | (1 << 3) | (1 << 8);
const MATERIAL_HUD_WINDOW: i64 = 13;
const BLENDING_BEHIND_WINDOW: i64 = 0;
const STATE_ACTIVE: i64 = 1;
const TEXT_ALIGNMENT_CENTER: i64 = 2;

const FONT_SIZE: f64 = 13.0;
const HORIZONTAL_PADDING: f64 = 14.0;
const VERTICAL_PADDING: f64 = 9.0;

pub struct HudWindow {
    panel: id,
    background: id,
    label: id,
    fade_in: f64,
    fade_out: f64,
}

impl HudWindow {
    /// Build the (hidden) panel; must run on the main thread
    pub fn new(fade_in: f64, fade_out: f64) -> Self {
        unsafe {
            let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(140.0, 46.0));
            let panel: id = msg_send![class!(NSPanel), alloc];
            let panel: id = msg_send![panel, initWithContentRect:frame
                                               styleMask:PANEL_STYLE
                                               backing:BACKING_STORE_BUFFERED
                                               defer:NO];

            let () = msg_send![panel, setFloatingPanel:YES];
            let () = msg_send![panel, setLevel:STATUS_WINDOW_LEVEL];
            let () = msg_send![panel, setCollectionBehavior:COLLECTION_BEHAVIOR];
            let () = msg_send![panel, setOpaque:NO];
            let clear_color: id = msg_send![class!(NSColor), clearColor];
            let () = msg_send![panel, setBackgroundColor:clear_color];
            let () = msg_send![panel, setHasShadow:YES];
            let () = msg_send![panel, setHidesOnDeactivate:NO];
            let () = msg_send![panel, setIgnoresMouseEvents:YES];
            let () = msg_send![panel, setReleasedWhenClosed:NO];

            let background: id = msg_send![class!(NSVisualEffectView), alloc];
            let background: id = msg_send![background, initWithFrame:frame];
            let () = msg_send![background, setMaterial:MATERIAL_HUD_WINDOW];
            let () = msg_send![background, setBlendingMode:BLENDING_BEHIND_WINDOW];
            let () = msg_send![background, setState:STATE_ACTIVE];
            let () = msg_send![background, setWantsLayer:YES];
            let layer: id = msg_send![background, layer];
            if layer != nil {
                let () = msg_send![layer, setMasksToBounds:YES];
            }

            let label: id = msg_send![class!(NSTextField), labelWithString:ns_string("")];
            let font: id = msg_send![class!(NSFont), boldSystemFontOfSize:FONT_SIZE];
            let () = msg_send![label, setFont:font];
            let text_color: id = msg_send![class!(NSColor), labelColor];
            let () = msg_send![label, setTextColor:text_color];
            let () = msg_send![label, setAlignment:TEXT_ALIGNMENT_CENTER];

            let () = msg_send![background, addSubview:label];
            let () = msg_send![panel, setContentView:background];

            Self {
                panel,
                background,
                label,
                fade_in,
                fade_out,
            }
        }
    }

    /// Show `message` under the pointer, fading in
    pub fn show(&self, message: &str) {
        debug!("HUD: {}", message);
        unsafe {
            // A pending orderOut from the previous hide would swallow this HUD
            let () = msg_send![class!(NSObject),
                               cancelPreviousPerformRequestsWithTarget:self.panel];
            let () = msg_send![self.label, setStringValue:ns_string(message)];
            let () = msg_send![self.label, sizeToFit];
            let text_frame: NSRect = msg_send![self.label, frame];
            let text_size = text_frame.size;

            let size = Size::new(
                (text_size.width + HORIZONTAL_PADDING * 2.0).ceil(),
                (text_size.height + VERTICAL_PADDING * 2.0).ceil(),
            );
            let origin = self.origin_for(size);

            let label_origin = NSPoint::new(HORIZONTAL_PADDING, VERTICAL_PADDING);
            let label_frame = NSRect::new(label_origin, text_size);
            let () = msg_send![self.label, setFrame:label_frame];
            let panel_frame = NSRect::new(
                NSPoint::new(origin.x, origin.y),
                NSSize::new(size.width, size.height),
            );
            let () = msg_send![self.panel, setFrame:panel_frame display:YES];

            let layer: id = msg_send![self.background, layer];
            if layer != nil {
                let () = msg_send![layer, setCornerRadius:size.height / 2.0];
            }

            let () = msg_send![self.panel, setAlphaValue:0.0f64];
            let () = msg_send![self.panel, orderFrontRegardless];
            self.animate_alpha(1.0, self.fade_in);
        }
    }

    /// Fade out, then order the panel out
    pub fn hide(&self) {
        unsafe {
            self.animate_alpha(0.0, self.fade_out);
            let () = msg_send![self.panel, performSelector:sel!(orderOut:)
                                          withObject:nil
                                          afterDelay:self.fade_out];
        }
    }

    fn origin_for(&self, size: Size) -> Point {
        let pointer = pointer_location();
        let displays = displays();
        match active_display(&displays, pointer) {
            Some(display) => hud_origin(pointer, size, display.visible_frame),
            None => Point::new(pointer.x - size.width / 2.0, pointer.y - size.height),
        }
    }

    unsafe fn animate_alpha(&self, alpha: f64, duration: f64) {
        let () = msg_send![class!(NSAnimationContext), beginGrouping];
        let animation_context: id = msg_send![class!(NSAnimationContext), currentContext];
        let () = msg_send![animation_context, setDuration:duration];
        let animator: id = msg_send![self.panel, animator];
        let () = msg_send![animator, setAlphaValue:alpha];
        let () = msg_send![class!(NSAnimationContext), endGrouping];
    }
}

impl Drop for HudWindow {
    fn drop(&mut self) {
        unsafe {
            let () = msg_send![self.panel, orderOut:nil];
            let () = msg_send![self.background, release];
            let () = msg_send![self.panel, release];
        }
    }
}

//! Modal text entry for renaming clips and editing their text
use cocoa::appkit::NSApp;
use cocoa::base::{id, nil, NO, YES};
use cocoa::foundation::{NSPoint, NSRect, NSSize};
use log::debug;
use objc::{class, msg_send, sel, sel_impl};

use crate::foundation::{ns_string, to_string};

const ALERT_FIRST_BUTTON_RETURN: isize = 1000;
const BEZEL_BORDER: u64 = 2;
const VIEW_WIDTH_SIZABLE: u64 = 1 << 1;

const FIELD_SIZE: (f64, f64) = (300.0, 24.0);
const TEXT_AREA_SIZE: (f64, f64) = (420.0, 220.0);

/// What the prompt edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Single-line field
    Name,
    /// Scrollable multi-line text view
    Text,
}

pub struct TextPrompt<'a> {
    kind: PromptKind,
    title: &'a str,
    initial: &'a str,
}

impl<'a> TextPrompt<'a> {
    pub fn name(initial: &'a str) -> Self {
        Self {
            kind: PromptKind::Name,
            title: "Rename Clip",
            initial,
        }
    }

    pub fn text(initial: &'a str) -> Self {
        Self {
            kind: PromptKind::Text,
            title: "Edit Clip Text",
            initial,
        }
    }

    /// Run the alert modally; `None` when the user cancels
    pub fn run(&self) -> Option<String> {
        unsafe {
            // Accessory apps have to activate before their alert can take key focus
            let () = msg_send![NSApp(), activateIgnoringOtherApps:YES];

            let alert: id = msg_send![class!(NSAlert), new];
            let () = msg_send![alert, setMessageText:ns_string(self.title)];
            let _: id = msg_send![alert, addButtonWithTitle:ns_string("Save")];
            let _: id = msg_send![alert, addButtonWithTitle:ns_string("Cancel")];

            let (accessory, editor) = match self.kind {
                PromptKind::Name => {
                    let field = self.name_field();
                    (field, field)
                }
                PromptKind::Text => self.text_area(),
            };
            let () = msg_send![alert, setAccessoryView:accessory];
            let () = msg_send![alert, layout];
            let window: id = msg_send![alert, window];
            let () = msg_send![window, setInitialFirstResponder:editor];

            let response: isize = msg_send![alert, runModal];
            let value = if response == ALERT_FIRST_BUTTON_RETURN {
                match self.kind {
                    PromptKind::Name => {
                        let string: id = msg_send![editor, stringValue];
                        to_string(string)
                    }
                    PromptKind::Text => {
                        let string: id = msg_send![editor, string];
                        to_string(string)
                    }
                }
            } else {
                None
            };

            let () = msg_send![accessory, release];
            let () = msg_send![alert, release];
            let outcome = if value.is_some() { "saved" } else { "cancelled" };
            debug!("{} prompt {}", self.title, outcome);
            value
        }
    }

    /// Retained single-line text field
    unsafe fn name_field(&self) -> id {
        let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(FIELD_SIZE.0, FIELD_SIZE.1));
        let field: id = msg_send![class!(NSTextField), alloc];
        let field: id = msg_send![field, initWithFrame:frame];
        let () = msg_send![field, setStringValue:ns_string(self.initial)];
        field
    }

    /// Retained scroll view and the text view it hosts
    unsafe fn text_area(&self) -> (id, id) {
        let (width, height) = TEXT_AREA_SIZE;
        let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));

        let scroll: id = msg_send![class!(NSScrollView), alloc];
        let scroll: id = msg_send![scroll, initWithFrame:frame];
        let () = msg_send![scroll, setHasVerticalScroller:YES];
        let () = msg_send![scroll, setHasHorizontalScroller:NO];
        let () = msg_send![scroll, setBorderType:BEZEL_BORDER];

        let content: NSSize = msg_send![scroll, contentSize];
        let text_frame = NSRect::new(NSPoint::new(0.0, 0.0), content);
        let text_view: id = msg_send![class!(NSTextView), alloc];
        let text_view: id = msg_send![text_view, initWithFrame:text_frame];
        let () = msg_send![text_view, setRichText:NO];
        let () = msg_send![text_view, setAutomaticQuoteSubstitutionEnabled:NO];
        let () = msg_send![text_view, setAutomaticDashSubstitutionEnabled:NO];
        let () = msg_send![text_view, setVerticallyResizable:YES];
        let () = msg_send![text_view, setHorizontallyResizable:NO];
        let () = msg_send![text_view, setAutoresizingMask:VIEW_WIDTH_SIZABLE];
        let container: id = msg_send![text_view, textContainer];
        if container != nil {
            let () = msg_send![container, setWidthTracksTextView:YES];
        }
        let () = msg_send![text_view, setString:ns_string(self.initial)];

        let () = msg_send![scroll, setDocumentView:text_view];
        // The scroll view keeps its document view alive
        let () = msg_send![text_view, release];
        (scroll, text_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pick_editor_kind() {
        let name = TextPrompt::name("Greeting");
        assert_eq!(name.kind, PromptKind::Name);
        assert_eq!(name.initial, "Greeting");
        assert_eq!(TextPrompt::text("body").kind, PromptKind::Text);
    }
}

use anyhow::{bail, Result};
use clipjoint_core::clipboard::Pasteboard;
use cocoa::base::{id, nil, BOOL, NO};
use objc::{class, msg_send, sel, sel_impl};

use crate::foundation::{data_bytes, ns_string, to_string};

const TYPE_STRING: &str = "public.utf8-plain-text";
const TYPE_RTF: &str = "public.rtf";
const TYPE_HTML: &str = "public.html";

/// The system-wide general pasteboard
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralPasteboard;

impl GeneralPasteboard {
    pub fn new() -> Self {
        Self
    }

    unsafe fn handle() -> id {
        msg_send![class!(NSPasteboard), generalPasteboard]
    }

    unsafe fn data(kind: &str) -> Option<Vec<u8>> {
        let data: id = msg_send![Self::handle(), dataForType: ns_string(kind)];
        data_bytes(data)
    }
}

impl Pasteboard for GeneralPasteboard {
    fn change_count(&self) -> i64 {
        unsafe {
            let count: isize = msg_send![Self::handle(), changeCount];
            count as i64
        }
    }

    fn plain_text(&self) -> Option<String> {
        unsafe {
            let string: id = msg_send![Self::handle(), stringForType: ns_string(TYPE_STRING)];
            to_string(string)
        }
    }

    /// Plain string of the first attributed string the pasteboard can produce
    fn rich_text(&self) -> Option<String> {
        unsafe {
            let pasteboard = Self::handle();
            let classes: id =
                msg_send![class!(NSArray), arrayWithObject: class!(NSAttributedString)];
            let objects: id = msg_send![pasteboard, readObjectsForClasses:classes options:nil];
            if objects == nil {
                return None;
            }

            let first: id = msg_send![objects, firstObject];
            if first == nil {
                return None;
            }
            let string: id = msg_send![first, string];
            to_string(string)
        }
    }

    fn rtf_data(&self) -> Option<Vec<u8>> {
        unsafe { Self::data(TYPE_RTF) }
    }

    fn html_data(&self) -> Option<Vec<u8>> {
        unsafe { Self::data(TYPE_HTML) }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        unsafe {
            let pasteboard = Self::handle();
            let _: isize = msg_send![pasteboard, clearContents];
            let written: BOOL =
                msg_send![pasteboard, setString:ns_string(text) forType:ns_string(TYPE_STRING)];
            if written == NO {
                bail!("Pasteboard refused the text");
            }
        }
        Ok(())
    }
}

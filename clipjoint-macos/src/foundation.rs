use cocoa::base::{id, nil};
use cocoa::foundation::NSString;
use objc::{class, msg_send, sel, sel_impl};
use std::ffi::{c_void, CStr};

/// Autoreleased `NSString` copy of `value`
pub(crate) unsafe fn ns_string(value: &str) -> id {
    let string = NSString::alloc(nil).init_str(value);
    msg_send![string, autorelease]
}

/// UTF-8 copy of an `NSString`, `None` for nil
pub(crate) unsafe fn to_string(string: id) -> Option<String> {
    if string == nil {
        return None;
    }

    let utf8: *const std::os::raw::c_char = msg_send![string, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Byte copy of an `NSData`, `None` for nil
pub(crate) unsafe fn data_bytes(data: id) -> Option<Vec<u8>> {
    if data == nil {
        return None;
    }

    let length: usize = msg_send![data, length];
    if length == 0 {
        return Some(Vec::new());
    }
    let bytes: *const u8 = msg_send![data, bytes];
    if bytes.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts(bytes, length).to_vec())
}

/// Autoreleased `NSData` holding a copy of `bytes`
pub(crate) unsafe fn ns_data(bytes: &[u8]) -> id {
    msg_send![class!(NSData), dataWithBytes:bytes.as_ptr() as *const c_void length:bytes.len()]
}

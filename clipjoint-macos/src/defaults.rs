use anyhow::Result;
use clipjoint_core::preferences::PreferenceStore;
use cocoa::base::id;
use objc::{class, msg_send, sel, sel_impl};

use crate::foundation::{data_bytes, ns_data, ns_string};

/// `NSUserDefaults.standardUserDefaults`, storing values as data blobs
#[derive(Debug, Default, Clone, Copy)]
pub struct UserDefaults;

impl UserDefaults {
    pub fn standard() -> Self {
        Self
    }

    unsafe fn handle() -> id {
        msg_send![class!(NSUserDefaults), standardUserDefaults]
    }
}

impl PreferenceStore for UserDefaults {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        unsafe {
            let data: id = msg_send![Self::handle(), dataForKey: ns_string(key)];
            data_bytes(data)
        }
    }

    fn set_data(&mut self, key: &str, data: &[u8]) -> Result<()> {
        unsafe {
            let () = msg_send![Self::handle(), setObject:ns_data(data) forKey:ns_string(key)];
        }
        Ok(())
    }
}

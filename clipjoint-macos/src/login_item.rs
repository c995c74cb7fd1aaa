//! Launch at login through `SMAppService.mainAppService` (macOS 13+)
use clipjoint_core::settings::{LoginItemError, LoginItemService};
use cocoa::base::{id, nil, BOOL, NO};
use log::debug;
use objc::runtime::Class;
use objc::{msg_send, sel, sel_impl};

use crate::foundation::to_string;

#[link(name = "ServiceManagement", kind = "framework")]
extern "C" {}

/// `SMAppServiceStatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceStatus {
    NotRegistered,
    Enabled,
    RequiresApproval,
    NotFound,
}

impl ServiceStatus {
    fn from_raw(raw: isize) -> Self {
        match raw {
            1 => ServiceStatus::Enabled,
            2 => ServiceStatus::RequiresApproval,
            3 => ServiceStatus::NotFound,
            _ => ServiceStatus::NotRegistered,
        }
    }
}

/// The running app's own login item
#[derive(Debug, Default, Clone, Copy)]
pub struct MainAppLoginItem;

impl MainAppLoginItem {
    pub fn new() -> Self {
        Self
    }

    unsafe fn service() -> Result<id, LoginItemError> {
        let class = Class::get("SMAppService").ok_or(LoginItemError::Unsupported)?;
        let service: id = msg_send![class, mainAppService];
        if service == nil {
            return Err(LoginItemError::Unsupported);
        }
        Ok(service)
    }

    fn status() -> Result<ServiceStatus, LoginItemError> {
        unsafe {
            let service = Self::service()?;
            let raw: isize = msg_send![service, status];
            Ok(ServiceStatus::from_raw(raw))
        }
    }

    /// Send `registerAndReturnError:` or `unregisterAndReturnError:`
    unsafe fn send(register: bool) -> Result<(), LoginItemError> {
        let service = Self::service()?;
        let mut error: id = nil;
        let succeeded: BOOL = if register {
            msg_send![service, registerAndReturnError: &mut error as *mut id]
        } else {
            msg_send![service, unregisterAndReturnError: &mut error as *mut id]
        };

        if succeeded == NO {
            let description: id = if error == nil {
                nil
            } else {
                msg_send![error, localizedDescription]
            };
            return Err(match to_string(description) {
                Some(message) => LoginItemError::Os(message),
                None => LoginItemError::RegistrationFailed,
            });
        }
        Ok(())
    }
}

impl LoginItemService for MainAppLoginItem {
    fn is_enabled(&self) -> bool {
        matches!(Self::status(), Ok(ServiceStatus::Enabled))
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), LoginItemError> {
        let status = Self::status()?;
        debug!("Login item status {:?}, requested enabled={}", status, enabled);

        if enabled {
            if status == ServiceStatus::Enabled {
                return Ok(());
            }

            unsafe { Self::send(true)? };
            match Self::status()? {
                ServiceStatus::Enabled => Ok(()),
                ServiceStatus::RequiresApproval => Err(LoginItemError::RequiresApproval),
                ServiceStatus::NotFound => Err(LoginItemError::NotFound),
                ServiceStatus::NotRegistered => Err(LoginItemError::RegistrationFailed),
            }
        } else {
            if matches!(status, ServiceStatus::NotRegistered | ServiceStatus::NotFound) {
                return Ok(());
            }
            unsafe { Self::send(false) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_raw() {
        assert_eq!(ServiceStatus::from_raw(0), ServiceStatus::NotRegistered);
        assert_eq!(ServiceStatus::from_raw(1), ServiceStatus::Enabled);
        assert_eq!(ServiceStatus::from_raw(2), ServiceStatus::RequiresApproval);
        assert_eq!(ServiceStatus::from_raw(3), ServiceStatus::NotFound);
        assert_eq!(ServiceStatus::from_raw(42), ServiceStatus::NotRegistered);
    }
}

//! Launch-at-login preference backed by the OS login item service
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginItemError {
    #[error("Open System Settings > General > Login Items and allow ClipJoint to finish enabling launch at login.")]
    RequiresApproval,
    #[error("Launch at login is only available after ClipJoint is installed in /Applications.")]
    NotFound,
    #[error("ClipJoint could not enable launch at login. Please try again.")]
    RegistrationFailed,
    #[error("Launch at login is not supported on this system.")]
    Unsupported,
    #[error("{0}")]
    Os(String),
}

/// OS login item registration
pub trait LoginItemService {
    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool) -> Result<(), LoginItemError>;
}

/// Observable settings state
pub struct AppSettings<L> {
    login_items: L,
    launch_at_login_enabled: bool,
    launch_at_login_error: Option<String>,
}

impl<L: LoginItemService> AppSettings<L> {
    pub fn new(login_items: L) -> Self {
        let launch_at_login_enabled = login_items.is_enabled();
        Self {
            login_items,
            launch_at_login_enabled,
            launch_at_login_error: None,
        }
    }

    pub fn launch_at_login_enabled(&self) -> bool {
        self.launch_at_login_enabled
    }

    /// Message from the last failed toggle, cleared by the next success
    pub fn launch_at_login_error(&self) -> Option<&str> {
        self.launch_at_login_error.as_deref()
    }

    /// Toggle the login item; the visible state is re-read from the OS either way
    pub fn set_launch_at_login(&mut self, enabled: bool) {
        let result = self.login_items.set_enabled(enabled);
        self.launch_at_login_enabled = self.login_items.is_enabled();

        match result {
            Ok(()) => {
                log::info!("Launch at login {}", if enabled { "enabled" } else { "disabled" });
                self.launch_at_login_error = None;
            }
            Err(e) => {
                log::warn!("Failed to change launch at login: {}", e);
                self.launch_at_login_error = Some(e.to_string());
            }
        }
    }

    /// Re-read the login item state, e.g. after the user changed it in System Settings
    pub fn refresh(&mut self) {
        self.launch_at_login_enabled = self.login_items.is_enabled();
    }
}

/// Stand-in for systems without a login item service
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedLoginItems;

impl LoginItemService for UnsupportedLoginItems {
    fn is_enabled(&self) -> bool {
        false
    }

    fn set_enabled(&mut self, _enabled: bool) -> Result<(), LoginItemError> {
        Err(LoginItemError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registration that can be told to fail, optionally after changing state anyway
    struct FakeLoginItems {
        enabled: bool,
        failure: Option<LoginItemError>,
        apply_despite_failure: bool,
    }

    impl FakeLoginItems {
        fn new(enabled: bool) -> Self {
            Self {
                enabled,
                failure: None,
                apply_despite_failure: false,
            }
        }
    }

    impl LoginItemService for FakeLoginItems {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        fn set_enabled(&mut self, enabled: bool) -> Result<(), LoginItemError> {
            match self.failure.clone() {
                Some(error) => {
                    if self.apply_despite_failure {
                        self.enabled = enabled;
                    }
                    Err(error)
                }
                None => {
                    self.enabled = enabled;
                    Ok(())
                }
            }
        }
    }

    #[test]
    fn test_initial_state_comes_from_service() {
        assert!(AppSettings::new(FakeLoginItems::new(true)).launch_at_login_enabled());
        assert!(!AppSettings::new(FakeLoginItems::new(false)).launch_at_login_enabled());
    }

    #[test]
    fn test_successful_toggle_clears_error() {
        let mut settings = AppSettings::new(FakeLoginItems::new(false));
        settings.launch_at_login_error = Some("old".into());

        settings.set_launch_at_login(true);
        assert!(settings.launch_at_login_enabled());
        assert_eq!(settings.launch_at_login_error(), None);
    }

    #[test]
    fn test_failure_keeps_message_and_resyncs() {
        let mut service = FakeLoginItems::new(false);
        service.failure = Some(LoginItemError::RequiresApproval);
        let mut settings = AppSettings::new(service);

        settings.set_launch_at_login(true);
        assert!(!settings.launch_at_login_enabled());
        assert_eq!(
            settings.launch_at_login_error(),
            Some("Open System Settings > General > Login Items and allow ClipJoint to finish enabling launch at login.")
        );
    }

    #[test]
    fn test_failure_after_partial_success_reflects_os_state() {
        let mut service = FakeLoginItems::new(false);
        service.failure = Some(LoginItemError::Os("denied".into()));
        service.apply_despite_failure = true;
        let mut settings = AppSettings::new(service);

        settings.set_launch_at_login(true);
        assert!(settings.launch_at_login_enabled());
        assert_eq!(settings.launch_at_login_error(), Some("denied"));
    }

    #[test]
    fn test_unsupported_service() {
        let mut settings = AppSettings::new(UnsupportedLoginItems);
        settings.set_launch_at_login(true);
        assert!(!settings.launch_at_login_enabled());
        assert_eq!(
            settings.launch_at_login_error(),
            Some("Launch at login is not supported on this system.")
        );
    }

    #[test]
    fn test_refresh_picks_up_external_changes() {
        let mut settings = AppSettings::new(FakeLoginItems::new(false));
        settings.login_items.enabled = true;
        settings.refresh();
        assert!(settings.launch_at_login_enabled());
    }
}

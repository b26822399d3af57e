use anyhow::Result;

pub const LOGIN_USERNAME_ID: &'static str = "login-username";
pub const LOGIN_PASSWORD_ID: &'static str = "login-password";
pub const LOGIN_SUBMIT_ID: &'static str = "login-submit";
pub const LOGIN_ALERT_ID: &'static str = "login-alert";
pub const LOGOUT_ID: &'static str = "logout-btn";

/// Ids of the elements the handlers look for. The markup is rendered by
/// the server, these must match it.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementIds {
    pub login_username: String,
    pub login_password: String,
    pub login_submit: String,
    pub login_alert: String,
    pub logout: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            login_username: LOGIN_USERNAME_ID.to_string(),
            login_password: LOGIN_PASSWORD_ID.to_string(),
            login_submit: LOGIN_SUBMIT_ID.to_string(),
            login_alert: LOGIN_ALERT_ID.to_string(),
            logout: LOGOUT_ID.to_string(),
        }
    }
}

/// The document the handlers run against.
///
/// Lookups are by element id. A missing element reads as `None`, and
/// writing text to one is a no-op.
pub trait Page {
    fn pathname(&self) -> Option<String>;

    fn input_value(&self, id: &str) -> Option<String>;

    fn set_text(&self, id: &str, text: &str);

    fn is_disabled(&self, id: &str) -> bool;

    fn set_disabled(&self, id: &str, disabled: bool) -> Result<()>;

    /// Full page navigation. The current script context is gone after this
    /// takes effect.
    fn navigate(&self, route: &str);
}

/// Keeps a control disabled while alive and re-enables it on drop, however
/// the surrounding request ended.
pub struct DisabledGuard<'a, P: Page> {
    page: &'a P,
    id: &'a str,
}

impl<'a, P: Page> DisabledGuard<'a, P> {
    pub fn hold(page: &'a P, id: &'a str) -> Self {
        toggle(page, id, true);
        Self { page, id }
    }
}

impl<P: Page> Drop for DisabledGuard<'_, P> {
    fn drop(&mut self) {
        toggle(self.page, self.id, false);
    }
}

// Best-effort, a control we can't toggle must not break the request.
fn toggle<P: Page>(page: &P, id: &str, disabled: bool) {
    if let Err(e) = page.set_disabled(id, disabled) {
        log::debug!("could not set disabled={disabled} on #{id}: {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FakePage;

    #[test]
    fn guard_disables_then_restores() {
        let page = FakePage::login_form("admin", "hunter2");
        {
            let _guard = DisabledGuard::hold(&page, LOGIN_SUBMIT_ID);
            assert!(page.is_disabled(LOGIN_SUBMIT_ID));
        }
        assert!(!page.is_disabled(LOGIN_SUBMIT_ID));
        assert_eq!(
            page.disabled_history(),
            vec![
                (LOGIN_SUBMIT_ID.to_string(), true),
                (LOGIN_SUBMIT_ID.to_string(), false)
            ]
        );
    }

    #[test]
    fn guard_survives_failing_toggles() {
        let page = FakePage::login_form("admin", "hunter2").with_broken_toggles();
        {
            let _guard = DisabledGuard::hold(&page, LOGIN_SUBMIT_ID);
        }
        assert!(page.disabled_history().is_empty());
    }
}

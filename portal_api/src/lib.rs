pub mod http;
pub mod message;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod prelude;

pub use http::PortalApi;

/// Origin used when no page origin is available, e.g. outside the browser.
#[cfg(debug_assertions)]
pub const DEFAULT_ORIGIN: &'static str = "http://127.0.0.1:8050";
#[cfg(not(debug_assertions))]
pub const DEFAULT_ORIGIN: &'static str = "http://localhost:8050";

pub const LOGIN_ROUTE: &'static str = "/login";
pub const LANDING_ROUTE: &'static str = "/forecasting";
pub const LOGIN_ENDPOINT: &'static str = "/auth/login";
pub const LOGOUT_ENDPOINT: &'static str = "/auth/logout";

/// Routes and endpoints the frontend handlers work with.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalConfig {
    /// Prefix of the login page path. Also where logout sends the browser.
    pub login_route: String,
    /// Where a successful login sends the browser.
    pub landing_route: String,
    pub login_endpoint: String,
    pub logout_endpoint: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_route: LOGIN_ROUTE.to_string(),
            landing_route: LANDING_ROUTE.to_string(),
            login_endpoint: LOGIN_ENDPOINT.to_string(),
            logout_endpoint: LOGOUT_ENDPOINT.to_string(),
        }
    }
}

impl PortalConfig {
    /// Whether `pathname` belongs to the login page.
    pub fn is_login_path(&self, pathname: &str) -> bool {
        pathname.starts_with(self.login_route.as_str())
    }
}

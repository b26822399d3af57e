use std::rc::Rc;

use portal_api::PortalApi;

use crate::delegate::TreeNode;
use crate::delegate::closest_with_id;
use crate::page::DisabledGuard;
use crate::page::ElementIds;
use crate::page::Page;

#[derive(Clone, Debug, PartialEq)]
pub enum LogoutOutcome {
    InFlight,
    /// The server answered with this status. The answer itself is not
    /// checked.
    Confirmed(u16),
    Unreachable,
}

/// Logs out on click. Active on every page.
pub struct LogoutHandler<P: Page> {
    page: Rc<P>,
    api: PortalApi,
    ids: ElementIds,
}

impl<P: Page> LogoutHandler<P> {
    pub fn new(page: Rc<P>, api: PortalApi, ids: ElementIds) -> Self {
        Self { page, api, ids }
    }

    pub fn claims<N: TreeNode>(&self, target: N) -> bool {
        closest_with_id(target, &self.ids.logout).is_some()
    }

    /// Always ends on the login page, whatever the server said or whether
    /// it said anything.
    pub async fn logout(&self) -> LogoutOutcome {
        let page = self.page.as_ref();

        if page.is_disabled(&self.ids.logout) {
            log::debug!("logout already in flight");
            return LogoutOutcome::InFlight;
        }

        let _leaving = DisabledGuard::hold(page, &self.ids.logout);
        let outcome = match self.api.logout().await {
            Ok(status) => {
                log::debug!("logout answered with status {status}");
                LogoutOutcome::Confirmed(status)
            }
            Err(e) => {
                log::error!("logout error: {e:#}");
                LogoutOutcome::Unreachable
            }
        };
        page.navigate(&self.api.config.login_route);
        outcome
    }
}

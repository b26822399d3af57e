use std::rc::Rc;

use portal_api::prelude::*;

use crate::delegate::TreeNode;
use crate::delegate::closest_with_id;
use crate::page::DisabledGuard;
use crate::page::ElementIds;
use crate::page::Page;

const SUBMIT_KEY: &'static str = "Enter";

/// Which branch a login attempt took.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    MissingCredentials,
    /// The submit control was already disabled by an earlier attempt.
    InFlight,
    Authenticated,
    Rejected(String),
    Unreachable(String),
}

pub struct LoginHandler<P: Page> {
    page: Rc<P>,
    api: PortalApi,
    ids: ElementIds,
}

impl<P: Page> LoginHandler<P> {
    pub fn new(page: Rc<P>, api: PortalApi, ids: ElementIds) -> Self {
        Self { page, api, ids }
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Returns the handler only if the page is the login page. Nothing
    /// should be wired up otherwise.
    pub fn attach(self) -> Option<Self> {
        let pathname = self.page.pathname()?;
        if self.api.config.is_login_path(&pathname) {
            Some(self)
        } else {
            log::debug!("not on the login page ({pathname}), login handler stays off");
            None
        }
    }

    /// Whether a click that landed on `target` is a click on the submit
    /// control.
    pub fn claims<N: TreeNode>(&self, target: N) -> bool {
        closest_with_id(target, &self.ids.login_submit).is_some()
    }

    pub fn is_submit_key(&self, key: &str, focused_id: Option<&str>) -> bool {
        key == SUBMIT_KEY
            && focused_id
                .is_some_and(|id| id == self.ids.login_username || id == self.ids.login_password)
    }

    pub async fn submit(&self) -> LoginOutcome {
        let page = self.page.as_ref();
        let ids = &self.ids;

        if page.is_disabled(&ids.login_submit) {
            log::debug!("login already in flight");
            return LoginOutcome::InFlight;
        }

        let Some(request) = LoginRequest::from_fields(
            page.input_value(&ids.login_username),
            page.input_value(&ids.login_password),
        ) else {
            page.set_text(&ids.login_alert, message::CREDENTIALS_REQUIRED);
            return LoginOutcome::MissingCredentials;
        };

        let _submitting = DisabledGuard::hold(page, &ids.login_submit);
        match self.api.login(&request).await {
            Ok(reply) if reply.succeeded() => {
                log::info!(
                    "logged in as {} (role: {})",
                    reply.body.username.as_deref().unwrap_or(&request.username),
                    reply.body.role.as_deref().unwrap_or("none"),
                );
                page.navigate(&self.api.config.landing_route);
                LoginOutcome::Authenticated
            }
            Ok(reply) => {
                log::warn!("login rejected, status {}", reply.status);
                let text = message::login_failed(&reply);
                page.set_text(&ids.login_alert, &text);
                LoginOutcome::Rejected(text)
            }
            Err(e) => {
                log::error!("fetch error: {e:#}");
                let text = message::unreachable(&e);
                page.set_text(&ids.login_alert, &text);
                LoginOutcome::Unreachable(text)
            }
        }
    }
}

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;

use super::types::*;
use crate::DEFAULT_ORIGIN;
use crate::PortalConfig;

#[derive(Clone, Debug)]
pub struct PortalApi {
    pub url: String,
    pub config: PortalConfig,
}

impl Default for PortalApi {
    fn default() -> Self {
        Self {
            url: DEFAULT_ORIGIN.to_string(),
            config: PortalConfig::default(),
        }
    }
}

impl PortalApi {
    /// `url` is the origin serving the auth endpoints, e.g. the page's
    /// `window.location.origin`.
    pub fn new(url: String) -> Result<Self> {
        Self::with_config(url, PortalConfig::default())
    }

    pub fn with_config(url: String, config: PortalConfig) -> Result<Self> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("portal url must start with http:// or https://, got \"{url}\"");
        }
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            config,
        })
    }

    fn post(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let request = reqwest::Client::new().post(format!("{}{}", self.url, endpoint));
        // cookies are the session, send them along
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_same_origin();
        request
    }

    /// Post credentials to the login endpoint. Any HTTP status is a reply;
    /// only transport failures are errors.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginReply> {
        let response = self
            .post(&self.config.login_endpoint)
            .json(request)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => LoginResponse::from_slice(&bytes),
            Err(e) => {
                log::debug!("failed to read login response body: {e}");
                LoginResponse::default()
            }
        };
        Ok(LoginReply { status, body })
    }

    /// End the server session. Returns the HTTP status; the body is read
    /// but never inspected.
    pub async fn logout(&self) -> Result<u16> {
        let response = self
            .post(&self.config.logout_endpoint)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        if let Err(e) = response.bytes().await {
            log::debug!("failed to read logout response body: {e}");
        }
        Ok(status)
    }
}

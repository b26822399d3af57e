//! User facing text for the login form's alert region.

use crate::http::types::LoginReply;

pub const CREDENTIALS_REQUIRED: &'static str = "Username dan password diperlukan.";
pub const LOGIN_FAILED_PREFIX: &'static str = "Login gagal: ";
pub const UNREACHABLE_PREFIX: &'static str = "Gagal menghubungi server: ";

pub type ReasonExtractor = fn(&LoginReply) -> Option<String>;

/// Tried in order, first hit wins. `http_status` answers when none do.
pub const FAILURE_REASONS: &[ReasonExtractor] = &[server_error, server_msg];

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

pub fn server_error(reply: &LoginReply) -> Option<String> {
    non_empty(&reply.body.error)
}

pub fn server_msg(reply: &LoginReply) -> Option<String> {
    non_empty(&reply.body.msg)
}

pub fn http_status(reply: &LoginReply) -> String {
    format!("HTTP {}", reply.status)
}

pub fn failure_reason(reply: &LoginReply) -> String {
    FAILURE_REASONS
        .iter()
        .find_map(|extract| extract(reply))
        .unwrap_or_else(|| http_status(reply))
}

pub fn login_failed(reply: &LoginReply) -> String {
    format!("{LOGIN_FAILED_PREFIX}{}", failure_reason(reply))
}

pub fn unreachable(error: &anyhow::Error) -> String {
    format!("{UNREACHABLE_PREFIX}{error}")
}

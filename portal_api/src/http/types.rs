use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a request from raw form values. Returns `None` if either
    /// field is missing or empty.
    pub fn from_fields(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Self { username, password })
            }
            _ => None,
        }
    }
}

/// Body of a `/auth/login` reply. Every field is optional and read on its
/// own, a field of the wrong type is dropped without losing the others.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct LoginResponse {
    pub success: Option<bool>,
    pub error: Option<String>,
    pub msg: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
}

impl LoginResponse {
    pub fn from_slice(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                log::debug!("unreadable login response body: {e}");
                Self::default()
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        // empty strings count as absent
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            success: value.get("success").and_then(Value::as_bool),
            error: text("error"),
            msg: text("msg"),
            username: text("username"),
            role: text("role"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginReply {
    pub status: u16,
    pub body: LoginResponse,
}

impl LoginReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Both the transport status and the payload agree the login worked.
    pub fn succeeded(&self) -> bool {
        self.is_success() && self.body.success == Some(true)
    }
}

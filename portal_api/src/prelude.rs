pub use crate::PortalApi;
pub use crate::PortalConfig;
pub use crate::http::types::*;
pub use crate::message;

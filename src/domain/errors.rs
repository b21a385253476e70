use http::StatusCode;
use std::fmt;

#[derive(Debug, Clone)]
pub enum GatewayError {
    UnsupportedMethod(String),
    InvalidUrl(String),
    StorageFailed(String),
    AuthRejected { status: StatusCode, detail: String },
    RequestFailed { status: Option<StatusCode>, detail: String },
}

impl GatewayError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::AuthRejected { status, .. } => Some(*status),
            GatewayError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// True for the 401/403 statuses that must trigger a login redirect.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::UnsupportedMethod(method) => write!(f, "Unsupported HTTP method: {}", method),
            GatewayError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            GatewayError::StorageFailed(msg) => write!(f, "Credential storage failed: {}", msg),
            GatewayError::AuthRejected { status, detail } => {
                write!(f, "Authorization rejected ({}): {}", status.as_u16(), detail)
            }
            GatewayError::RequestFailed {
                status: Some(status),
                detail,
            } => write!(f, "Request failed ({}): {}", status.as_u16(), detail),
            GatewayError::RequestFailed { status: None, detail } => write!(f, "Request failed: {}", detail),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type Result<T> = std::result::Result<T, GatewayError>;

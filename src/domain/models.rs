pub use http::StatusCode;
use std::collections::HashMap;
use url::Url;

use super::{GatewayError, Result};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Response payload, passed through to callers without transformation.
pub type Payload = serde_json::Value;

/// Opaque session token read from client-side storage. Issuance and
/// revocation happen in the login flow, outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    /// The storage layer reports a missing cookie as an empty string, so a
    /// blank token counts as no credential at all.
    pub fn is_usable(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Value sent verbatim as the Authorization header.
    pub fn authorization_value(&self) -> &str {
        &self.token
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// The verb set is closed; anything else is rejected up front.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            "PATCH" => Ok(HttpMethod::Patch),
            other => Err(GatewayError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing request, built per call and discarded once resolved.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub id: uuid::Uuid,
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HashMap<String, String>,
    pub body: Option<Payload>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }
}

/// Redirect effect. The gateway core only describes it; the calling layer
/// decides how to execute it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    pub location: String,
}

impl LoginRedirect {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Terminal state of one gateway call.
#[derive(Debug)]
pub enum Outcome {
    /// Transport succeeded; payload is the transport's, unchanged.
    Completed(Payload),
    /// No credential in storage. The request was never issued and no error
    /// is surfaced; the redirect is the whole of the result.
    RedirectToLogin(LoginRedirect),
    /// 401/403 from the transport: redirect, but the caller still observes
    /// the failure.
    AuthRejected {
        redirect: LoginRedirect,
        error: GatewayError,
    },
    /// Any other failure, logged and propagated unchanged.
    Failed(GatewayError),
}

impl Outcome {
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Outcome::Completed(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn redirect(&self) -> Option<&LoginRedirect> {
        match self {
            Outcome::RedirectToLogin(redirect) => Some(redirect),
            Outcome::AuthRejected { redirect, .. } => Some(redirect),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GatewayError> {
        match self {
            Outcome::AuthRejected { error, .. } => Some(error),
            Outcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Collapses to the original calling convention: missing credential
    /// resolves to `None` rather than an error.
    pub fn into_result(self) -> Result<Option<Payload>> {
        match self {
            Outcome::Completed(payload) => Ok(Some(payload)),
            Outcome::RedirectToLogin(_) => Ok(None),
            Outcome::AuthRejected { error, .. } => Err(error),
            Outcome::Failed(error) => Err(error),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GatewayConfig {
    /// Base for resolving relative request targets. When unset, targets must
    /// be absolute URLs.
    pub base_url: Option<Url>,
    /// Storage key the credential is read from.
    pub credential_key: String,
    /// Location the login redirect points at.
    pub login_location: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            credential_key: "access_token".to_string(),
            login_location: "/admin/login".to_string(),
        }
    }
}

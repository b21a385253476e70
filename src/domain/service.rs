use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, warn};
use url::Url;

use super::{
    ApiRequest, Credential, GatewayConfig, GatewayError, HttpMethod, LoginRedirect, Outcome, Payload, Result,
    AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE,
};
use crate::ports::{CredentialStorePort, HttpTransportPort};

/// Gateway core. Reads the credential through the store port, issues the
/// request through the transport port, and reports redirects as data so the
/// calling layer decides how to execute them.
#[derive(Clone)]
pub struct GatewayService {
    credentials: Arc<dyn CredentialStorePort>,
    transport: Arc<dyn HttpTransportPort>,
    config: GatewayConfig,
}

impl GatewayService {
    pub fn new(
        credentials: Arc<dyn CredentialStorePort>,
        transport: Arc<dyn HttpTransportPort>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            credentials,
            transport,
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// One best-effort attempt: no retries, no gateway-level timeout. Store
    /// errors propagate as `Err`; everything within the contract comes back
    /// as an `Outcome`.
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Payload>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<Outcome> {
        let credential = match self.load_credential().await? {
            Some(credential) => credential,
            None => {
                debug!("no credential under {:?}, skipping {} {}", self.config.credential_key, method, url);
                return Ok(Outcome::RedirectToLogin(self.login_redirect()));
            }
        };

        let target = self.resolve_target(url)?;

        let headers = merge_headers(&credential, extra_headers);
        let mut request = ApiRequest::new(method, target).with_headers(headers);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        match self.transport.execute(&request).await {
            Ok(payload) => Ok(Outcome::Completed(payload)),
            Err(err) => {
                // Every failure gets the diagnostic line, then 401/403 pick up
                // the redirect on top.
                error!("API Error ({} {}): {}", request.method, request.url, err);
                if err.is_auth_rejection() {
                    warn!(request_id = %request.id, "authorization rejected, redirecting to login");
                    Ok(Outcome::AuthRejected {
                        redirect: self.login_redirect(),
                        error: promote_auth_rejection(err),
                    })
                } else {
                    Ok(Outcome::Failed(err))
                }
            }
        }
    }

    async fn load_credential(&self) -> Result<Option<Credential>> {
        let credential = self.credentials.load(&self.config.credential_key).await?;
        Ok(credential.filter(Credential::is_usable))
    }

    fn resolve_target(&self, url: &str) -> Result<Url> {
        if url.trim().is_empty() {
            return Err(GatewayError::InvalidUrl("empty target".to_string()));
        }
        let parsed = match &self.config.base_url {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        parsed.map_err(|e| GatewayError::InvalidUrl(format!("{}: {}", url, e)))
    }

    fn login_redirect(&self) -> LoginRedirect {
        LoginRedirect::new(self.config.login_location.clone())
    }
}

/// Defaults overlaid with caller headers. Caller values win for every key
/// except Authorization, which is always the stored credential. Collisions
/// are resolved case-insensitively so the merged map never carries two
/// spellings of one header.
fn merge_headers(credential: &Credential, extra: Option<HashMap<String, String>>) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert(
        AUTHORIZATION_HEADER.to_string(),
        credential.authorization_value().to_string(),
    );
    headers.insert(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string());

    if let Some(extra) = extra {
        for (key, value) in extra {
            if key.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                continue;
            }
            let colliding = headers.keys().find(|k| k.eq_ignore_ascii_case(&key)).cloned();
            if let Some(colliding) = colliding {
                headers.remove(&colliding);
            }
            headers.insert(key, value);
        }
    }

    headers
}

/// The transport reports a bare status; the 401/403 classification is the
/// gateway's contract, so the variant is rewritten here.
fn promote_auth_rejection(err: GatewayError) -> GatewayError {
    match err {
        GatewayError::RequestFailed {
            status: Some(status),
            detail,
        } => GatewayError::AuthRejected { status, detail },
        other => other,
    }
}

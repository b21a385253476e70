use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{GatewayService, HttpMethod, Outcome, Payload, Result};
use crate::ports::NavigatorPort;

/// Calling-layer composition: drives the gateway core and executes the
/// redirect effect it returns. This is the piece that restores the original
/// `request(method, url, data?, headers?)` contract, verbs as strings
/// included.
#[derive(Clone)]
pub struct ApiClient {
    service: GatewayService,
    navigator: Arc<dyn NavigatorPort>,
}

impl ApiClient {
    pub fn new(service: GatewayService, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { service, navigator }
    }

    /// One gateway call. Redirect execution happens here, once per call;
    /// repeated failing calls each navigate independently.
    pub async fn request(
        &self,
        method: &str,
        url: &str,
        body: Option<Payload>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<Outcome> {
        let method = HttpMethod::parse(method)?;
        self.dispatch(method, url, body, extra_headers).await
    }

    pub async fn get(&self, url: &str) -> Result<Outcome> {
        self.dispatch(HttpMethod::Get, url, None, None).await
    }

    pub async fn post(&self, url: &str, body: Payload) -> Result<Outcome> {
        self.dispatch(HttpMethod::Post, url, Some(body), None).await
    }

    pub async fn put(&self, url: &str, body: Payload) -> Result<Outcome> {
        self.dispatch(HttpMethod::Put, url, Some(body), None).await
    }

    pub async fn delete(&self, url: &str) -> Result<Outcome> {
        self.dispatch(HttpMethod::Delete, url, None, None).await
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Payload>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<Outcome> {
        let outcome = self.service.request(method, url, body, extra_headers).await?;
        if let Some(redirect) = outcome.redirect() {
            self.navigator.navigate(redirect).await?;
        }
        Ok(outcome)
    }
}

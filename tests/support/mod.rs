#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use authgate::domain::{ApiRequest, GatewayConfig, GatewayError, GatewayService, LoginRedirect, Payload};
use authgate::ports::{HttpTransportPort, NavigatorPort};
use authgate::{ApiClient, Result};

/// Transport replaying a queue of scripted results, capturing what it saw.
pub struct ScriptedTransport {
    seen: Mutex<Vec<ApiRequest>>,
    script: Mutex<VecDeque<std::result::Result<Payload, GatewayError>>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<std::result::Result<Payload, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            script: Mutex::new(script.into_iter().collect()),
        })
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.seen.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransportPort for ScriptedTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Payload> {
        self.seen.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("transport script exhausted"))
    }
}

/// Navigator that records where it was asked to go.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl NavigatorPort for RecordingNavigator {
    async fn navigate(&self, redirect: &LoginRedirect) -> Result<()> {
        self.visited.lock().unwrap().push(redirect.location.clone());
        Ok(())
    }
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        base_url: Some("http://127.0.0.1:8000".parse().unwrap()),
        ..GatewayConfig::default()
    }
}

pub fn client_with(
    store: Arc<authgate::adapters::CookieCredentialStore>,
    transport: Arc<ScriptedTransport>,
    navigator: Arc<RecordingNavigator>,
) -> ApiClient {
    let service = GatewayService::new(store, transport, test_config());
    ApiClient::new(service, navigator)
}

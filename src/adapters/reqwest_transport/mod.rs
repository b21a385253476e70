use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::{ApiRequest, GatewayError, Payload, Result};
use crate::ports::HttpTransportPort;

/// HTTP transport over reqwest. Reports every failure, network-level or
/// HTTP-level, as `RequestFailed`; the gateway decides what 401/403 mean.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::RequestFailed {
                status: None,
                detail: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Payload> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|_| GatewayError::UnsupportedMethod(request.method.as_str().to_string()))?;

        let mut builder = self
            .client
            .request(method, request.url.as_str())
            .headers(build_headers(&request.headers));

        if let Some(body) = &request.body {
            // reqwest only fills in Content-Type when the header map lacks one,
            // so a caller override survives serialization.
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| GatewayError::RequestFailed {
            status: e.status(),
            detail: format!("HTTP request failed: {}", e),
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| GatewayError::RequestFailed {
            status: Some(status),
            detail: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(GatewayError::RequestFailed {
                status: Some(status),
                detail: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(decode_payload(&bytes))
    }
}

fn decode_payload(bytes: &[u8]) -> Payload {
    if bytes.is_empty() {
        return Payload::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Payload::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn build_headers(headers: &HashMap<String, String>) -> reqwest::header::HeaderMap {
    let mut header_map = reqwest::header::HeaderMap::new();

    for (key, value) in headers {
        if let (Ok(name), Ok(val)) = (
            key.parse::<reqwest::header::HeaderName>(),
            value.parse::<reqwest::header::HeaderValue>(),
        ) {
            header_map.insert(name, val);
        }
    }

    header_map
}

use crate::domain::{ApiRequest, Payload, Result};
use async_trait::async_trait;

/// Port over the HTTP transport. Every failure is reported as
/// `GatewayError::RequestFailed`; classifying 401/403 is the domain's job.
#[async_trait]
pub trait HttpTransportPort: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<Payload>;
}

use crate::domain::{LoginRedirect, Result};
use async_trait::async_trait;

/// Port for executing the login redirect effect the gateway core returns
/// as data. Navigating twice to the same location is harmless.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn navigate(&self, redirect: &LoginRedirect) -> Result<()>;
}

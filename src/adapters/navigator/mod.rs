use async_trait::async_trait;
use tracing::info;

use crate::domain::{LoginRedirect, Result};
use crate::ports::NavigatorPort;

/// Navigator that records redirects in the diagnostic log. Actual page
/// navigation belongs to the embedding UI shell, which wires in its own
/// `NavigatorPort`.
pub struct TracingNavigator;

impl TracingNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NavigatorPort for TracingNavigator {
    async fn navigate(&self, redirect: &LoginRedirect) -> Result<()> {
        info!("redirecting to {}", redirect.location);
        Ok(())
    }
}

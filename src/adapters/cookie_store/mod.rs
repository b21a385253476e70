use crate::domain::{Credential, Result};
use crate::ports::CredentialStorePort;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Credential store backed by a cookie header string, the storage medium of
/// the original admin client. The login flow owns writes; `replace` models
/// that external hand-off. Reads re-parse the string every time, so
/// concurrent writers race benignly (last write wins).
pub struct CookieCredentialStore {
    cookies: Arc<RwLock<String>>,
}

impl CookieCredentialStore {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self {
            cookies: Arc::new(RwLock::new(cookies.into())),
        }
    }

    /// Swap the whole cookie string, as a login or logout would.
    pub async fn replace(&self, cookies: impl Into<String>) {
        let mut guard = self.cookies.write().await;
        *guard = cookies.into();
    }
}

impl Default for CookieCredentialStore {
    fn default() -> Self {
        Self::new("")
    }
}

fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    for pair in cookies.split(';') {
        let pair = pair.trim();
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        if key == name {
            return parts.next().map(str::to_string);
        }
    }
    None
}

#[async_trait]
impl CredentialStorePort for CookieCredentialStore {
    async fn load(&self, key: &str) -> Result<Option<Credential>> {
        let cookies = self.cookies.read().await;
        let value = cookie_value(&cookies, key).filter(|v| !v.is_empty());
        match &value {
            Some(_) => log::debug!("found credential under cookie {}", key),
            None => log::debug!("no credential under cookie {}", key),
        }
        Ok(value.map(Credential::new))
    }
}

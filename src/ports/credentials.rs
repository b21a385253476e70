use crate::domain::{Credential, Result};
use async_trait::async_trait;

/// Port for reading the session credential from client-side storage
#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    /// Get the credential stored under `key`
    ///
    /// Returns None if nothing is stored under that key. The credential
    /// lifecycle (issuance, revocation) is external to this crate.
    async fn load(&self, key: &str) -> Result<Option<Credential>>;
}

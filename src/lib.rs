//! Authenticated request gateway for a browser-style admin client.
//!
//! The gateway reads a bearer credential from client-side storage, refuses to
//! issue a request without one (reporting a login redirect instead), merges a
//! default header set with caller headers, and maps 401/403 responses to a
//! redirect-plus-error so callers always observe the failure.

pub mod adapters;
pub mod client;
pub mod domain;
pub mod ports;

pub use client::ApiClient;
pub use domain::{
    ApiRequest, Credential, GatewayConfig, GatewayError, GatewayService, HttpMethod, LoginRedirect, Outcome,
    Payload, Result,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Installs the fmt subscriber with env-based filtering. Safe to call more
/// than once; later calls are no-ops.
pub fn init_diagnostics() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
    tracing::debug!("authgate {} diagnostics ready", version());
}

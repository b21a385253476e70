pub mod cookie_store;
pub mod navigator;
pub mod reqwest_transport;

pub use cookie_store::CookieCredentialStore;
pub use navigator::TracingNavigator;
pub use reqwest_transport::ReqwestTransport;

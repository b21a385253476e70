pub mod credentials;
pub mod navigation;
pub mod transport;

pub use credentials::CredentialStorePort;
pub use navigation::NavigatorPort;
pub use transport::HttpTransportPort;

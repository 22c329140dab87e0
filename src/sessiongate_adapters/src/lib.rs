pub mod auth_validation;
pub mod config;
pub mod handlers;
pub mod identity;
pub mod refresh;
pub mod session;

#[cfg(test)]
mod test_support;

pub use auth_validation::{JwksKeySource, JwtTokenVerifier, JwtVerifierConfig, TrustRoot};
pub use self::config::{Settings, SettingsError};
pub use handlers::ApiError;
pub use identity::{InMemoryIdentityProvider, ProviderApp, ProviderAppError, RestIdentityProvider};
pub use refresh::HttpSessionSink;
pub use session::CookieSessionStore;

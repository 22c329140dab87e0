pub mod domain;
pub mod error;
pub mod http_abstraction;
pub mod paths;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    claims::Claims,
    credential::Credential,
    email::{Email, EmailError},
    password::{Password, PasswordError},
    token_change::TokenChange,
};

pub use error::SessionError;

pub use paths::ProtectedPaths;

pub use ports::{
    identity_provider::{IdentityProvider, IdentityProviderError},
    session_sink::{SessionSink, SessionSinkError},
};

pub use strategies::{
    cookie_store::SessionCookieStore,
    token_verifier::{TokenVerifier, VerificationError},
};

pub use http_abstraction::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers};

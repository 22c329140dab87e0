use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{credential::Credential, email::Email, password::Password};

#[derive(Debug, Clone, Error)]
pub enum IdentityProviderError {
    #[error("Email address is already in use")]
    EmailAlreadyInUse,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Password is too weak")]
    WeakPassword,
    #[error("Unexpected identity provider error: {0}")]
    Unexpected(String),
}

impl PartialEq for IdentityProviderError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::EmailAlreadyInUse, Self::EmailAlreadyInUse)
                | (Self::InvalidCredentials, Self::InvalidCredentials)
                | (Self::WeakPassword, Self::WeakPassword)
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// The external identity provider that owns user accounts.
///
/// Credential storage, password hashing and email delivery all happen on the
/// provider side; this port only exposes the calls the session layer needs.
#[async_trait]
pub trait IdentityProvider: Clone + Send + Sync + 'static {
    /// Create an account. The returned credential belongs to the new,
    /// not yet verified user.
    async fn sign_up(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Credential, IdentityProviderError>;

    async fn sign_in(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Credential, IdentityProviderError>;

    /// Ask the provider to email a verification link to the credential's owner.
    async fn send_email_verification(
        &self,
        credential: &Credential,
    ) -> Result<(), IdentityProviderError>;
}

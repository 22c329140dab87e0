use async_trait::async_trait;
use thiserror::Error;

use crate::{Claims, Credential};

/// Why a credential failed verification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Credential has expired")]
    Expired,
    #[error("Credential is invalid")]
    Invalid,
    #[error("Email address is not verified")]
    Unverified,
}

/// Trait for checking credentials against the identity provider's trust root.
///
/// Verifiers are used both on the login path (before a cookie is ever set)
/// and by the route guard on every protected request.
///
/// Implementations must:
/// 1. Check the signature against the provider's published keys
/// 2. Reject expired credentials with [`VerificationError::Expired`]
/// 3. Reject credentials whose `email_verified` claim is false with
///    [`VerificationError::Unverified`]
///
/// Any other failure, including errors raised by the underlying crypto
/// library or while fetching keys, is reported as
/// [`VerificationError::Invalid`].
///
/// Verification has no side effects beyond caching of key material.
#[async_trait]
pub trait TokenVerifier: Clone + Send + Sync + 'static {
    async fn verify(&self, credential: &Credential) -> Result<Claims, VerificationError>;
}

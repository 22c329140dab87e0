use thiserror::Error;

use crate::VerificationError;

/// Reasons a protected request is turned away.
///
/// Every variant is handled the same way at the guard boundary (redirect to
/// login); the distinction only exists for logging.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid credential")]
    InvalidCredential,
    #[error("Expired credential")]
    ExpiredCredential,
    #[error("Email address is not verified")]
    UnverifiedEmail,
    #[error("Missing session cookie")]
    MissingCookie,
}

impl From<VerificationError> for SessionError {
    fn from(error: VerificationError) -> Self {
        match error {
            VerificationError::Invalid => SessionError::InvalidCredential,
            VerificationError::Expired => SessionError::ExpiredCredential,
            VerificationError::Unverified => SessionError::UnverifiedEmail,
        }
    }
}

use sessiongate_application::{LoginError, SignupError};
use sessiongate_core::{
    AuthResponseBuilder, AuthResponseHelpers, IdentityProviderError, SessionError,
};
use thiserror::Error;

/// Errors surfaced to HTTP clients. Messages are safe to show to users.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Please verify your email before logging in.")]
    EmailNotVerified,
    #[error("Email address is already in use")]
    EmailAlreadyInUse,
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidInput(_) => 400,
            ApiError::InvalidCredentials | ApiError::Unauthenticated => 401,
            ApiError::EmailNotVerified => 403,
            ApiError::EmailAlreadyInUse => 409,
            ApiError::Unexpected(_) => 500,
        }
    }

    /// Text for the response body. Internal details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unexpected(_) => "Something went wrong. Please try again.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn into_response<B: AuthResponseBuilder>(self, builder: B) -> B::Response {
        if let ApiError::Unexpected(detail) = &self {
            tracing::error!(%detail, "Request failed");
        }
        builder.error(self.status_code(), &self.message())
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::EmailNotVerified => ApiError::EmailNotVerified,
            LoginError::Provider(IdentityProviderError::Unexpected(detail)) => {
                ApiError::Unexpected(detail)
            }
            LoginError::Provider(_) | LoginError::CredentialRejected(_) => {
                ApiError::InvalidCredentials
            }
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::Provider(IdentityProviderError::EmailAlreadyInUse) => {
                ApiError::EmailAlreadyInUse
            }
            SignupError::Provider(IdentityProviderError::WeakPassword) => {
                ApiError::InvalidInput("Password is too weak".to_string())
            }
            SignupError::Provider(IdentityProviderError::InvalidCredentials) => {
                ApiError::InvalidInput("Invalid email or password".to_string())
            }
            SignupError::Provider(IdentityProviderError::Unexpected(detail)) => {
                ApiError::Unexpected(detail)
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(_: SessionError) -> Self {
        ApiError::Unauthenticated
    }
}

//! Framework-agnostic signup handler.

use secrecy::Secret;
use serde::Deserialize;
use sessiongate_application::SignupUseCase;
use sessiongate_core::{AuthResponseBuilder, Email, IdentityProvider, Password};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Create an account and trigger the verification email. No session cookie
/// is set: the user logs in after verifying.
pub async fn handle_signup<P, B>(
    provider: &P,
    request: SignupRequest,
    builder: B,
) -> Result<B::Response, ApiError>
where
    P: IdentityProvider,
    B: AuthResponseBuilder,
{
    let email =
        Email::try_from(request.email).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let password =
        Password::try_from(request.password).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    SignupUseCase::new(provider.clone())
        .execute(email, password)
        .await?;

    Ok(builder.status(201).json_body(serde_json::json!({
        "success": true,
        "message": "Verification email sent. Please check your inbox.",
    })).build())
}

//! Framework-agnostic session introspection handler.

use sessiongate_core::{
    AuthResponseBuilder, AuthResponseHelpers, Credential, SessionError, TokenVerifier,
};

use super::error::ApiError;

/// Describe the signed-in user, or fail with 401 when the cookie is missing
/// or does not verify.
pub async fn handle_session<V, B>(
    verifier: &V,
    credential: Option<Credential>,
    builder: B,
) -> Result<B::Response, ApiError>
where
    V: TokenVerifier,
    B: AuthResponseBuilder,
{
    let credential = credential.ok_or(SessionError::MissingCookie)?;
    let claims = verifier
        .verify(&credential)
        .await
        .map_err(SessionError::from)?;

    Ok(builder.ok_json(serde_json::json!({
        "uid": claims.user_id(),
        "email": claims.email,
        "emailVerified": claims.email_verified,
        "expiresAt": claims.exp,
    })))
}

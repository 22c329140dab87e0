//! Framework-agnostic login handler.

use secrecy::Secret;
use serde::Deserialize;
use sessiongate_application::LoginUseCase;
use sessiongate_core::{
    AuthResponseBuilder, AuthResponseHelpers, Email, IdentityProvider, Password,
    SessionCookieStore, TokenVerifier,
};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Exchange email and password for a session cookie.
///
/// The cookie is only written once the freshly issued credential passes the
/// same verification the route guard applies, so unverified accounts never
/// get a session. Malformed input is reported with the same generic message
/// as wrong credentials.
///
/// # Example
///
/// ```ignore
/// pub async fn login(
///     State(state): State<AppState>,
///     Json(request): Json<LoginRequest>,
/// ) -> Result<Response, LoginRouteError> {
///     handle_login(&state.provider, &state.verifier, &state.cookies, request, response_builder())
///         .await
///         .map_err(LoginRouteError)
/// }
/// ```
pub async fn handle_login<P, V, C, B>(
    provider: &P,
    verifier: &V,
    store: &C,
    request: LoginRequest,
    builder: B,
) -> Result<B::Response, ApiError>
where
    P: IdentityProvider,
    V: TokenVerifier,
    C: SessionCookieStore,
    B: AuthResponseBuilder,
{
    let email = Email::try_from(request.email).map_err(|_| ApiError::InvalidCredentials)?;
    let password = Password::try_from(request.password).map_err(|_| ApiError::InvalidCredentials)?;

    let use_case = LoginUseCase::new(provider.clone(), verifier.clone());
    let response = use_case.execute(email, password).await?;

    tracing::info!(uid = %response.claims.user_id(), "User logged in");

    Ok(store.set(builder, &response.credential).ok_json(serde_json::json!({
        "success": true,
        "uid": response.claims.user_id(),
        "email": response.claims.email,
    })))
}

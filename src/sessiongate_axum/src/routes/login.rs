use axum::{Json, extract::State, response::Response};
use sessiongate_adapters::handlers::{self, LoginRequest};
use sessiongate_core::{IdentityProvider, SessionCookieStore, TokenVerifier};

use super::error::RouteError;
use crate::{adapters::response_builder, state::SessionState};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<P, V, C>(
    State(state): State<SessionState<P, V, C>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, RouteError>
where
    P: IdentityProvider,
    V: TokenVerifier,
    C: SessionCookieStore,
{
    let response = handlers::handle_login(
        &state.provider,
        &state.verifier,
        &state.cookies,
        request,
        response_builder(),
    )
    .await?;

    Ok(response)
}

use axum::{Json, extract::State, response::Response};
use sessiongate_adapters::handlers::{self, SignupRequest};
use sessiongate_core::{IdentityProvider, SessionCookieStore, TokenVerifier};

use super::error::RouteError;
use crate::{adapters::response_builder, state::SessionState};

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<P, V, C>(
    State(state): State<SessionState<P, V, C>>,
    Json(request): Json<SignupRequest>,
) -> Result<Response, RouteError>
where
    P: IdentityProvider,
    V: TokenVerifier,
    C: SessionCookieStore,
{
    Ok(handlers::handle_signup(&state.provider, request, response_builder()).await?)
}

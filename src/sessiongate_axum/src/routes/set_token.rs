use axum::{Json, extract::State, response::Response};
use sessiongate_adapters::handlers::{self, SetTokenRequest};
use sessiongate_core::{IdentityProvider, SessionCookieStore, TokenVerifier};

use crate::{adapters::response_builder, state::SessionState};

#[tracing::instrument(name = "SetToken", skip_all)]
pub async fn set_token<P, V, C>(
    State(state): State<SessionState<P, V, C>>,
    Json(request): Json<SetTokenRequest>,
) -> Response
where
    P: IdentityProvider,
    V: TokenVerifier,
    C: SessionCookieStore,
{
    handlers::handle_set_token(&state.cookies, request, response_builder())
}

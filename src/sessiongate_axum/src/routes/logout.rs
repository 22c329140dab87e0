use axum::{extract::State, response::Response};
use sessiongate_adapters::handlers;
use sessiongate_core::{IdentityProvider, SessionCookieStore, TokenVerifier};

use crate::{adapters::response_builder, state::SessionState};

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<P, V, C>(State(state): State<SessionState<P, V, C>>) -> Response
where
    P: IdentityProvider,
    V: TokenVerifier,
    C: SessionCookieStore,
{
    handlers::handle_logout(&state.cookies, response_builder())
}

use axum::extract::{Request, State};
use axum::response::Response;
use sessiongate_adapters::handlers;
use sessiongate_core::{IdentityProvider, SessionCookieStore, TokenVerifier};

use super::error::RouteError;
use crate::{
    adapters::{AxumRequest, response_builder},
    state::SessionState,
};

#[tracing::instrument(name = "Session", skip_all)]
pub async fn session<P, V, C>(
    State(state): State<SessionState<P, V, C>>,
    request: Request,
) -> Result<Response, RouteError>
where
    P: IdentityProvider,
    V: TokenVerifier,
    C: SessionCookieStore,
{
    let credential = state.cookies.read(&AxumRequest(request));

    Ok(handlers::handle_session(&state.verifier, credential, response_builder()).await?)
}

//! Route guard as an axum middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use sessiongate_application::{GuardOutcome, RouteGuard};
use sessiongate_core::{AuthResponseHelpers, SessionCookieStore, TokenVerifier};

use crate::adapters::{AxumRequest, response_builder};
use crate::extract::CurrentUser;

/// Gate protected paths behind a verified session cookie.
///
/// Install with `axum::middleware::from_fn_with_state(guard, route_guard::<V, C>)`.
/// Allowed requests carry a [`CurrentUser`] extension; everything else on a
/// protected path is redirected to the login page.
pub async fn route_guard<V, C>(
    State(guard): State<RouteGuard<V, C>>,
    request: Request,
    next: Next,
) -> Response
where
    V: TokenVerifier,
    C: SessionCookieStore,
{
    let request = AxumRequest(request);
    let state = guard.classify(&request);
    let mut request = request.0;

    match guard.resolve(state).await {
        GuardOutcome::Bypass => next.run(request).await,
        GuardOutcome::Allow(claims) => {
            request.extensions_mut().insert(CurrentUser(claims));
            next.run(request).await
        }
        GuardOutcome::Redirect { location, reason } => {
            tracing::info!(path = %request.uri().path(), %reason, "Denied access to protected path");
            response_builder().redirect(&location)
        }
    }
}

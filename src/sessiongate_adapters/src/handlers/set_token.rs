//! Framework-agnostic set-token handler.

use serde::Deserialize;
use sessiongate_core::{AuthResponseBuilder, AuthResponseHelpers, Credential, SessionCookieStore};

/// Body of `POST /api/set-token`. A missing or `null` token means signed out.
#[derive(Debug, Default, Deserialize)]
pub struct SetTokenRequest {
    #[serde(default)]
    pub token: Option<String>,
}

/// Mirror the client's current credential into the session cookie.
///
/// The credential is stored as-is: it gets verified when a protected route
/// reads the cookie, not here. A blank or absent token clears the cookie.
pub fn handle_set_token<C, B>(store: &C, request: SetTokenRequest, builder: B) -> B::Response
where
    C: SessionCookieStore,
    B: AuthResponseBuilder,
{
    let credential = request.token.as_deref().and_then(Credential::parse);
    tracing::debug!(signed_in = credential.is_some(), "Updating session cookie");

    store.apply(builder, credential.as_ref()).success()
}

//! Mapping between credentials and the session cookie.

use crate::{
    Credential,
    http_abstraction::{AuthRequest, AuthResponseBuilder},
};

/// Framework-agnostic session cookie store.
///
/// The cookie lives in the browser; the "store" is the policy describing how
/// a credential is written into a response and read back from a request.
/// It uses the zero-cost HTTP traits (`AuthRequest`, `AuthResponseBuilder`)
/// so any web framework can drive it.
///
/// Writes are all-or-nothing:
/// - `set` always writes a complete cookie, replacing whatever the browser had
/// - `clear` always writes a removal cookie
///
/// # Example
///
/// ```ignore
/// let response = store
///     .set(response_builder(), &credential)
///     .status(200)
///     .json_body(json!({ "success": true }))
///     .build();
/// ```
pub trait SessionCookieStore: Clone + Send + Sync + 'static {
    /// Name of the cookie holding the credential.
    fn cookie_name(&self) -> &str;

    /// Add a `Set-Cookie` header carrying `credential` to the response.
    fn set<B: AuthResponseBuilder>(&self, builder: B, credential: &Credential) -> B;

    /// Add a `Set-Cookie` header that deletes the session cookie.
    fn clear<B: AuthResponseBuilder>(&self, builder: B) -> B;

    /// Read the session credential from a request, if one is present.
    ///
    /// An empty cookie value counts as absent.
    fn read<R: AuthRequest>(&self, request: &R) -> Option<Credential> {
        request.cookie(self.cookie_name()).and_then(Credential::parse)
    }

    /// Set the cookie when a credential is given, clear it otherwise.
    fn apply<B: AuthResponseBuilder>(&self, builder: B, credential: Option<&Credential>) -> B {
        match credential {
            Some(credential) => self.set(builder, credential),
            None => self.clear(builder),
        }
    }
}

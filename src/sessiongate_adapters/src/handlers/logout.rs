//! Framework-agnostic logout handler.

use sessiongate_core::{AuthResponseBuilder, AuthResponseHelpers, SessionCookieStore};

/// Clear the session cookie. Always succeeds, signed in or not.
pub fn handle_logout<C, B>(store: &C, builder: B) -> B::Response
where
    C: SessionCookieStore,
    B: AuthResponseBuilder,
{
    store.clear(builder).success()
}

use sessiongate_core::{IdentityProvider, SessionCookieStore, TokenVerifier};

/// Shared state for the session API routes.
#[derive(Clone)]
pub struct SessionState<P, V, C> {
    pub provider: P,
    pub verifier: V,
    pub cookies: C,
}

impl<P, V, C> SessionState<P, V, C>
where
    P: IdentityProvider,
    V: TokenVerifier,
    C: SessionCookieStore,
{
    pub fn new(provider: P, verifier: V, cookies: C) -> Self {
        Self {
            provider,
            verifier,
            cookies,
        }
    }
}

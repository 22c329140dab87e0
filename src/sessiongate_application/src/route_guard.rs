//! Request-time access control for protected paths.
//!
//! ```text
//! Login page or session API ────────────────────────▶ Bypass
//! Unprotected path ─────────────────────────────────▶ Bypass
//! NoCookie ─────────────────────────────────────────▶ Redirect(login)
//! CookiePresent ─▶ verify ─┬─ valid & email verified ▶ Allow(claims)
//!                          └─ anything else ─────────▶ Redirect(login)
//! ```
//!
//! The guard keeps no state between requests.

use std::sync::Arc;

use sessiongate_core::{
    AuthRequest, Claims, Credential, ProtectedPaths, SessionCookieStore, SessionError,
    TokenVerifier,
};

/// Mount point of the session endpoints. Never guarded, nor is the login page.
pub const SESSION_API_PREFIX: &str = "/api";

/// What the guard found on the incoming request, before any verification.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardState {
    Unprotected,
    NoCookie,
    CookiePresent(Credential),
}

/// Final decision for a single request.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The path is not protected; let it through untouched.
    Bypass,
    Allow(Claims),
    Redirect {
        location: String,
        reason: SessionError,
    },
}

#[derive(Clone)]
pub struct RouteGuard<V, C> {
    verifier: V,
    cookies: C,
    protected: Arc<ProtectedPaths>,
    always_public: Arc<ProtectedPaths>,
    login_path: Arc<str>,
}

impl<V, C> RouteGuard<V, C>
where
    V: TokenVerifier,
    C: SessionCookieStore,
{
    pub fn new(verifier: V, cookies: C, protected: ProtectedPaths, login_path: &str) -> Self {
        Self {
            verifier,
            cookies,
            protected: Arc::new(protected),
            always_public: Arc::new(ProtectedPaths::new([login_path, SESSION_API_PREFIX])),
            login_path: Arc::from(login_path),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn protected_paths(&self) -> &ProtectedPaths {
        &self.protected
    }

    /// Inspect the request without touching the verifier.
    ///
    /// This is synchronous so callers can drop their borrow of the request
    /// before awaiting [`resolve`](Self::resolve).
    pub fn classify<R: AuthRequest>(&self, request: &R) -> GuardState {
        let path = request.path();
        if self.always_public.is_protected(path) || !self.protected.is_protected(path) {
            return GuardState::Unprotected;
        }

        match self.cookies.read(request) {
            Some(credential) => GuardState::CookiePresent(credential),
            None => GuardState::NoCookie,
        }
    }

    #[tracing::instrument(name = "RouteGuard::resolve", skip_all)]
    pub async fn resolve(&self, state: GuardState) -> GuardOutcome {
        let result = match state {
            GuardState::Unprotected => return GuardOutcome::Bypass,
            GuardState::NoCookie => Err(SessionError::MissingCookie),
            GuardState::CookiePresent(credential) => self
                .verifier
                .verify(&credential)
                .await
                .map_err(SessionError::from),
        };

        match result {
            Ok(claims) => {
                tracing::debug!(user_id = %claims.sub, "Session verified");
                GuardOutcome::Allow(claims)
            }
            Err(reason) => {
                tracing::debug!(%reason, "Redirecting to login");
                GuardOutcome::Redirect {
                    location: self.login_path.to_string(),
                    reason,
                }
            }
        }
    }

    /// Classify and resolve in one go.
    pub async fn evaluate<R: AuthRequest + Sync>(&self, request: &R) -> GuardOutcome {
        let state = self.classify(request);
        self.resolve(state).await
    }
}

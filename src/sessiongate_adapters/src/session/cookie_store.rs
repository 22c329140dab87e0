use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use sessiongate_core::{AuthResponseBuilder, Credential, SessionCookieStore};

use crate::config::constants::session::{COOKIE_MAX_AGE_SECONDS, COOKIE_NAME, COOKIE_PATH};

/// Fixed attributes of the session cookie.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub path: String,
    pub max_age_seconds: i64,
    /// Only set in production; browsers drop `Secure` cookies on plain http.
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            name: COOKIE_NAME.to_string(),
            path: COOKIE_PATH.to_string(),
            max_age_seconds: COOKIE_MAX_AGE_SECONDS,
            secure: false,
        }
    }
}

/// Session cookie store backed by `Set-Cookie` headers.
#[derive(Debug, Clone, Default)]
pub struct CookieSessionStore {
    settings: Arc<CookieSettings>,
}

impl CookieSessionStore {
    pub fn new(settings: CookieSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &CookieSettings {
        &self.settings
    }

    /// The cookie carrying `credential`, with every attribute set.
    pub fn session_cookie(&self, credential: &Credential) -> Cookie<'static> {
        self.build_cookie(credential.expose().to_string())
    }

    /// A cookie that makes the browser delete the session cookie.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.build_cookie(String::new());
        cookie.make_removal();
        cookie
    }

    fn build_cookie(&self, value: String) -> Cookie<'static> {
        Cookie::build((self.settings.name.clone(), value))
            .path(self.settings.path.clone()) // path must match for removal to work
            .http_only(true) // prevent JavaScript from accessing the cookie
            .secure(self.settings.secure)
            .same_site(SameSite::Lax) // send cookie with "same-site" requests, and with "cross-site" top-level navigations.
            .max_age(time::Duration::seconds(self.settings.max_age_seconds))
            .build()
    }
}

impl SessionCookieStore for CookieSessionStore {
    fn cookie_name(&self) -> &str {
        &self.settings.name
    }

    fn set<B: AuthResponseBuilder>(&self, builder: B, credential: &Credential) -> B {
        builder.cookie(&self.session_cookie(credential).to_string())
    }

    fn clear<B: AuthResponseBuilder>(&self, builder: B) -> B {
        builder.cookie(&self.removal_cookie().to_string())
    }
}

use secrecy::{ExposeSecret, Secret};

/// Opaque signed token issued by the identity provider.
///
/// The value is wrapped in a `Secret` so it never shows up in `Debug` output
/// or tracing fields. This crate never inspects or mutates the token itself;
/// decoding is the job of a [`TokenVerifier`](crate::TokenVerifier).
#[derive(Debug, Clone)]
pub struct Credential(Secret<String>);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Parse a credential coming from an untrusted source (cookie, request body).
    ///
    /// Blank values are treated as "no credential".
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self::new(token))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Credential {}

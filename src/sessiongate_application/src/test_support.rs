//! Test doubles shared by the use case, guard and refresher tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use secrecy::Secret;
use sessiongate_core::{
    AuthRequest, AuthResponseBuilder, Claims, Credential, Email, IdentityProvider,
    IdentityProviderError, Password, SessionCookieStore, TokenVerifier, VerificationError,
};

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::new(raw.to_string())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::new(raw.to_string())).unwrap()
}

/// Provider that hands out a fixed token, or a fixed error.
#[derive(Clone)]
pub struct MockProvider {
    token: &'static str,
    failure: Option<IdentityProviderError>,
    verification_emails: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn issuing(token: &'static str) -> Self {
        Self {
            token,
            failure: None,
            verification_emails: Arc::default(),
        }
    }

    pub fn failing(error: IdentityProviderError) -> Self {
        Self {
            token: "",
            failure: Some(error),
            verification_emails: Arc::default(),
        }
    }

    pub fn verification_emails_sent(&self) -> usize {
        self.verification_emails.load(Ordering::SeqCst)
    }

    fn respond(&self) -> Result<Credential, IdentityProviderError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(Credential::new(self.token)),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockProvider {
    async fn sign_up(
        &self,
        _email: &Email,
        _password: &Password,
    ) -> Result<Credential, IdentityProviderError> {
        self.respond()
    }

    async fn sign_in(
        &self,
        _email: &Email,
        _password: &Password,
    ) -> Result<Credential, IdentityProviderError> {
        self.respond()
    }

    async fn send_email_verification(
        &self,
        _credential: &Credential,
    ) -> Result<(), IdentityProviderError> {
        self.verification_emails.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Verifier keyed on the literal token value.
#[derive(Clone)]
pub struct MockVerifier;

#[async_trait]
impl TokenVerifier for MockVerifier {
    async fn verify(&self, credential: &Credential) -> Result<Claims, VerificationError> {
        match credential.expose() {
            "valid" => Ok(Claims {
                sub: "user-1".to_string(),
                email: Some("test@example.com".to_string()),
                email_verified: true,
                exp: u64::MAX,
                iat: None,
            }),
            "expired" => Err(VerificationError::Expired),
            "unverified" => Err(VerificationError::Unverified),
            _ => Err(VerificationError::Invalid),
        }
    }
}

#[derive(Clone)]
pub struct MockCookieStore;

impl SessionCookieStore for MockCookieStore {
    fn cookie_name(&self) -> &str {
        "token"
    }

    fn set<B: AuthResponseBuilder>(&self, builder: B, credential: &Credential) -> B {
        builder.cookie(&format!("token={}", credential.expose()))
    }

    fn clear<B: AuthResponseBuilder>(&self, builder: B) -> B {
        builder.cookie("token=; Max-Age=0")
    }
}

pub struct MockRequest {
    pub path: String,
    pub cookies: HashMap<String, String>,
}

impl MockRequest {
    pub fn get(path: &str) -> Self {
        Self {
            path: path.to_string(),
            cookies: HashMap::new(),
        }
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }
}

impl AuthRequest for MockRequest {
    fn header(&self, _name: &str) -> Option<&str> {
        None
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    fn method(&self) -> &str {
        "GET"
    }

    fn path(&self) -> &str {
        &self.path
    }
}

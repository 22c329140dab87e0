use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use secrecy::{ExposeSecret, Secret};
use sessiongate_application::TokenChangeSource;
use sessiongate_core::{
    Claims, Credential, Email, IdentityProvider, IdentityProviderError, Password, TokenChange,
};
use tokio::sync::{RwLock, broadcast};

use crate::auth_validation::{JwtTokenVerifier, JwtVerifierConfig, sign_claims};

const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;
const EVENT_CAPACITY: usize = 64;

struct Account {
    uid: String,
    password: Secret<String>,
    email_verified: bool,
}

/// Self-contained identity provider for local development and tests.
///
/// Accounts live in memory and credentials are HS256 JWTs signed with a
/// shared secret, so a [`JwtTokenVerifier`] built by [`Self::verifier`] accepts
/// them. Every sign-in, renewal and sign-out is published to subscribers.
#[derive(Clone)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
    verification_requests: Arc<RwLock<HashSet<Email>>>,
    secret: Secret<String>,
    token_ttl_seconds: i64,
    events: broadcast::Sender<TokenChange>,
}

impl InMemoryIdentityProvider {
    pub fn new(secret: Secret<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            accounts: Arc::default(),
            verification_requests: Arc::default(),
            secret,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            events,
        }
    }

    /// Lifetime of issued credentials. Negative values mint already-expired tokens.
    pub fn with_token_ttl(mut self, seconds: i64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    /// Verifier that accepts exactly the credentials this provider issues.
    pub fn verifier(&self) -> JwtTokenVerifier {
        JwtTokenVerifier::with_shared_secret(self.secret.clone(), &JwtVerifierConfig::hs256())
    }

    /// Equivalent of the user clicking the link in the verification email.
    pub async fn verify_email(&self, email: &Email) -> Result<(), IdentityProviderError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(IdentityProviderError::InvalidCredentials)?;
        account.email_verified = true;
        Ok(())
    }

    pub async fn verification_requested(&self, email: &Email) -> bool {
        self.verification_requests.read().await.contains(email)
    }

    /// Issue a fresh credential for a signed-in user, as the provider's
    /// background token renewal does.
    pub async fn renew(&self, email: &Email) -> Result<Credential, IdentityProviderError> {
        let credential = {
            let accounts = self.accounts.read().await;
            let account = accounts
                .get(email)
                .ok_or(IdentityProviderError::InvalidCredentials)?;
            self.issue(email, account)?
        };

        self.publish(TokenChange::Renewed(credential.clone()));
        Ok(credential)
    }

    pub fn sign_out(&self) {
        self.publish(TokenChange::SignedOut);
    }

    fn issue(&self, email: &Email, account: &Account) -> Result<Credential, IdentityProviderError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: account.uid.clone(),
            email: Some(email.as_str().to_string()),
            email_verified: account.email_verified,
            exp: now.saturating_add(self.token_ttl_seconds).max(0) as u64,
            iat: Some(now as u64),
        };

        sign_claims(&claims, self.secret.expose_secret().as_bytes(), None)
            .map(Credential::new)
            .map_err(|e| IdentityProviderError::Unexpected(e.to_string()))
    }

    fn publish(&self, change: TokenChange) {
        tracing::debug!(kind = change.kind(), "Publishing token change");
        // No subscribers is not an error.
        let _ = self.events.send(change);
    }

    /// Decode one of our own credentials, regardless of expiry or verification.
    fn owner_of(&self, credential: &Credential) -> Result<Email, IdentityProviderError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;

        let claims = decode::<Claims>(
            credential.expose(),
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|e| IdentityProviderError::Unexpected(e.to_string()))?
        .claims;

        let email = claims
            .email
            .ok_or_else(|| IdentityProviderError::Unexpected("credential has no email".into()))?;
        Email::try_from(email.as_str()).map_err(|e| IdentityProviderError::Unexpected(e.to_string()))
    }
}

impl TokenChangeSource for InMemoryIdentityProvider {
    fn subscribe(&self) -> broadcast::Receiver<TokenChange> {
        self.events.subscribe()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_up(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Credential, IdentityProviderError> {
        let credential = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(email) {
                return Err(IdentityProviderError::EmailAlreadyInUse);
            }

            let account = Account {
                uid: format!("user-{}", accounts.len() + 1),
                password: Secret::new(password.expose().to_string()),
                email_verified: false,
            };
            let credential = self.issue(email, &account)?;
            accounts.insert(email.clone(), account);
            credential
        };

        // Creating an account also signs the new user in.
        self.publish(TokenChange::SignedIn(credential.clone()));
        Ok(credential)
    }

    async fn sign_in(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Credential, IdentityProviderError> {
        let credential = {
            let accounts = self.accounts.read().await;
            let account = accounts
                .get(email)
                .filter(|account| account.password.expose_secret() == password.expose())
                .ok_or(IdentityProviderError::InvalidCredentials)?;
            self.issue(email, account)?
        };

        self.publish(TokenChange::SignedIn(credential.clone()));
        Ok(credential)
    }

    async fn send_email_verification(
        &self,
        credential: &Credential,
    ) -> Result<(), IdentityProviderError> {
        let email = self.owner_of(credential)?;
        tracing::info!("Verification email requested");
        self.verification_requests.write().await.insert(email);
        Ok(())
    }
}

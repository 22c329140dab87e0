use std::sync::OnceLock;

use thiserror::Error;

use super::rest_provider::RestIdentityProvider;
use crate::auth_validation::{JwksKeySource, JwtTokenVerifier};
use crate::config::{Settings, provider::REQUEST_TIMEOUT};

static PROVIDER_APP: OnceLock<ProviderApp> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ProviderAppError {
    #[error("Missing provider API key")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Process-wide handle to the hosted identity provider.
///
/// Initialized at most once per process; later calls to
/// [`ProviderApp::initialize`] return the existing instance untouched.
pub struct ProviderApp {
    provider: RestIdentityProvider,
    verifier: JwtTokenVerifier,
    project_id: Option<String>,
}

impl ProviderApp {
    pub fn initialize(settings: &Settings) -> Result<&'static ProviderApp, ProviderAppError> {
        if let Some(app) = PROVIDER_APP.get() {
            tracing::debug!("Provider app already initialized");
            return Ok(app);
        }

        let app = Self::build(settings)?;
        // A concurrent initializer may have won; its instance is kept.
        let app = PROVIDER_APP.get_or_init(|| app);
        tracing::info!(project_id = ?app.project_id, "Provider app initialized");
        Ok(app)
    }

    pub fn get() -> Option<&'static ProviderApp> {
        PROVIDER_APP.get()
    }

    fn build(settings: &Settings) -> Result<Self, ProviderAppError> {
        let api_key = settings
            .provider
            .api_key
            .clone()
            .ok_or(ProviderAppError::MissingApiKey)?;

        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let keys = JwksKeySource::new(
            settings.provider.jwks_url.clone(),
            client.clone(),
            settings.jwks_cache_ttl(),
        );

        Ok(Self {
            provider: RestIdentityProvider::new(
                &settings.provider.identity_toolkit_url,
                api_key,
                client,
            ),
            verifier: JwtTokenVerifier::with_jwks(keys, &settings.verifier_config()),
            project_id: settings.provider.project_id.clone(),
        })
    }

    pub fn provider(&self) -> &RestIdentityProvider {
        &self.provider
    }

    pub fn verifier(&self) -> &JwtTokenVerifier {
        &self.verifier
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, File, builder::DefaultState};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sessiongate_core::ProtectedPaths;
use thiserror::Error;

use super::constants::{DEFAULT_CONFIG_FILE, env, prod, provider, session};
use crate::{auth_validation::JwtVerifierConfig, session::CookieSettings};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Malformed service account credential: {0}")]
    ServiceAccount(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
    pub environment: AppEnvironment,
    pub assets_dir: Option<String>,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    /// Public web API key of the provider project.
    pub api_key: Option<Secret<String>>,
    pub project_id: Option<String>,
    /// Service-account JSON blob, opaque apart from its `project_id`.
    pub service_account: Option<Secret<String>>,
    pub identity_toolkit_url: String,
    pub jwks_url: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub jwks_cache_seconds: u64,
    pub leeway_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub cookie_path: String,
    pub max_age_seconds: i64,
    pub login_path: String,
    pub protected_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub provider: ProviderSettings,
    pub session: SessionSettings,
}

#[derive(Deserialize)]
struct ServiceAccount {
    project_id: String,
}

impl Settings {
    /// Load settings from defaults, an optional config file, `.env` and the
    /// process environment (in increasing order of precedence).
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        let config_file =
            std::env::var(env::CONFIG_FILE_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());

        let config = Self::defaults()?
            .add_source(File::with_name(&config_file).required(false))
            .add_source(
                config::Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("app.allowed_origins")
                    .with_list_parse_key("session.protected_prefixes")
                    .try_parsing(true),
            )
            .set_override_option("provider.api_key", non_blank_env(env::PROVIDER_API_KEY_ENV_VAR))?
            .set_override_option(
                "provider.project_id",
                non_blank_env(env::PROVIDER_PROJECT_ID_ENV_VAR),
            )?
            .set_override_option(
                "provider.service_account",
                non_blank_env(env::PROVIDER_SERVICE_ACCOUNT_ENV_VAR),
            )?
            .build()?;

        Self::from_config(config)
    }

    /// Builder pre-populated with every default value.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("app.environment", "development")?
            .set_default("app.allowed_origins", Vec::<String>::new())?
            .set_default("provider.identity_toolkit_url", provider::IDENTITY_TOOLKIT_URL)?
            .set_default("provider.jwks_url", provider::JWKS_URL)?
            .set_default("provider.jwks_cache_seconds", provider::JWKS_CACHE_SECONDS)?
            .set_default("provider.leeway_seconds", 0_i64)?
            .set_default("session.cookie_name", session::COOKIE_NAME)?
            .set_default("session.cookie_path", session::COOKIE_PATH)?
            .set_default("session.max_age_seconds", session::COOKIE_MAX_AGE_SECONDS)?
            .set_default("session.login_path", session::LOGIN_PATH)?
            .set_default(
                "session.protected_prefixes",
                session::PROTECTED_PREFIXES.to_vec(),
            )
    }

    /// Deserialize and fill in values derived from the provider project.
    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let mut settings: Settings = config.try_deserialize()?;

        // Blank values from any source mean "not configured".
        let provider_settings = &mut settings.provider;
        provider_settings.api_key = provider_settings
            .api_key
            .take()
            .filter(|key| !is_blank(key.expose_secret()));
        provider_settings.service_account = provider_settings
            .service_account
            .take()
            .filter(|blob| !is_blank(blob.expose_secret()));
        provider_settings.project_id = provider_settings
            .project_id
            .take()
            .filter(|id| !is_blank(id));

        if settings.provider.project_id.is_none() {
            if let Some(blob) = &settings.provider.service_account {
                let account: ServiceAccount = serde_json::from_str(blob.expose_secret())?;
                settings.provider.project_id = Some(account.project_id);
            }
        }

        if let Some(project_id) = settings.provider.project_id.clone() {
            settings
                .provider
                .issuer
                .get_or_insert_with(|| format!("{}{}", provider::ISSUER_PREFIX, project_id));
            settings.provider.audience.get_or_insert(project_id);
        }

        Ok(settings)
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == AppEnvironment::Production
    }

    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings {
            name: self.session.cookie_name.clone(),
            path: self.session.cookie_path.clone(),
            max_age_seconds: self.session.max_age_seconds,
            secure: self.is_production(),
        }
    }

    pub fn protected_paths(&self) -> ProtectedPaths {
        ProtectedPaths::new(&self.session.protected_prefixes)
    }

    pub fn verifier_config(&self) -> JwtVerifierConfig {
        let mut config = JwtVerifierConfig::rs256().with_leeway(self.provider.leeway_seconds);
        config.issuer = self.provider.issuer.clone();
        config.audience = self.provider.audience.clone();
        config
    }

    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.provider.jwks_cache_seconds)
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !is_blank(value))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

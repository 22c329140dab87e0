use color_eyre::eyre::{Result, eyre};
use secrecy::Secret;
use sessiongate_adapters::{InMemoryIdentityProvider, ProviderApp, ProviderAppError, Settings};
use sessiongate_service::{SessionService, default_pages};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let service = match ProviderApp::initialize(&settings) {
        Ok(app) => SessionService::from_settings(
            app.provider().clone(),
            app.verifier().clone(),
            &settings,
        ),
        Err(ProviderAppError::MissingApiKey) if !settings.is_production() => {
            tracing::warn!("No provider API key configured, using the in-memory identity provider");
            let provider = InMemoryIdentityProvider::new(Secret::new(uuid::Uuid::new_v4().to_string()));
            let verifier = provider.verifier();
            SessionService::from_settings(provider, verifier, &settings)
        }
        Err(error) => return Err(eyre!(error)),
    }
    .with_pages(default_pages());

    let listener = tokio::net::TcpListener::bind(&settings.app.address).await?;
    tracing::info!("Starting session service...");

    service
        .run_standalone(listener, &settings.app.allowed_origins)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}

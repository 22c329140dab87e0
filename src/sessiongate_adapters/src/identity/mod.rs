pub mod in_memory_provider;
pub mod provider_app;
pub mod rest_provider;

pub use in_memory_provider::InMemoryIdentityProvider;
pub use provider_app::{ProviderApp, ProviderAppError};
pub use rest_provider::RestIdentityProvider;

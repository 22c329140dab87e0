use sessiongate_core::{Email, IdentityProvider, IdentityProviderError, Password};

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Identity provider error: {0}")]
    Provider(#[from] IdentityProviderError),
}

/// Signup use case - creates the account and asks the provider to send the
/// verification email.
///
/// The credential issued for the brand-new account is never turned into a
/// session: the user has to verify their email and log in first.
pub struct SignupUseCase<P: IdentityProvider> {
    provider: P,
}

impl<P: IdentityProvider> SignupUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<(), SignupError> {
        let credential = self.provider.sign_up(&email, &password).await?;

        self.provider.send_email_verification(&credential).await?;
        tracing::info!("Verification email requested");

        Ok(())
    }
}

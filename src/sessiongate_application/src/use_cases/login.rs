use sessiongate_core::{
    Claims, Credential, Email, IdentityProvider, IdentityProviderError, Password, TokenVerifier,
    VerificationError,
};

/// A freshly issued, server-verified session credential.
#[derive(Debug)]
pub struct LoginResponse {
    pub credential: Credential,
    pub claims: Claims,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Email address has not been verified")]
    EmailNotVerified,
    #[error("Issued credential was rejected: {0}")]
    CredentialRejected(VerificationError),
    #[error("Identity provider error: {0}")]
    Provider(#[from] IdentityProviderError),
}

/// Login use case - exchanges email/password for a verified credential.
///
/// The credential coming back from the provider is checked with the same
/// verifier the route guard uses, so a session cookie is only ever issued for
/// a valid credential belonging to a verified email address.
pub struct LoginUseCase<P, V>
where
    P: IdentityProvider,
    V: TokenVerifier,
{
    provider: P,
    verifier: V,
}

impl<P, V> LoginUseCase<P, V>
where
    P: IdentityProvider,
    V: TokenVerifier,
{
    pub fn new(provider: P, verifier: V) -> Self {
        Self { provider, verifier }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<LoginResponse, LoginError> {
        let credential = self.provider.sign_in(&email, &password).await?;

        match self.verifier.verify(&credential).await {
            Ok(claims) => Ok(LoginResponse { credential, claims }),
            Err(VerificationError::Unverified) => Err(LoginError::EmailNotVerified),
            Err(error) => Err(LoginError::CredentialRejected(error)),
        }
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};
use sessiongate_core::{Credential, Email, IdentityProvider, IdentityProviderError, Password};

/// Identity provider reached through the Identity Toolkit REST API.
#[derive(Clone)]
pub struct RestIdentityProvider {
    base_url: Arc<str>,
    api_key: Secret<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'static str,
    id_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    id_token: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestIdentityProvider {
    pub fn new(base_url: &str, api_key: Secret<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            api_key,
            client,
        }
    }

    async fn call<T, R>(&self, endpoint: &str, body: &T) -> Result<R, IdentityProviderError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/v1/{}", self.base_url, endpoint))
            .query(&[("key", self.api_key.expose_secret())])
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Unexpected(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<R>()
                .await
                .map_err(|e| IdentityProviderError::Unexpected(e.to_string()));
        }

        let message = response
            .json::<ErrorEnvelope>()
            .await
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| status.to_string());

        tracing::debug!(%status, %message, endpoint, "Identity provider rejected request");
        Err(map_error_message(&message))
    }
}

/// Messages look like `WEAK_PASSWORD : Password should be at least 6 characters`.
fn map_error_message(message: &str) -> IdentityProviderError {
    let code = message.split(':').next().unwrap_or_default().trim();
    match code {
        "EMAIL_EXISTS" => IdentityProviderError::EmailAlreadyInUse,
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            IdentityProviderError::InvalidCredentials
        }
        "WEAK_PASSWORD" => IdentityProviderError::WeakPassword,
        _ => IdentityProviderError::Unexpected(message.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    #[tracing::instrument(name = "RestIdentityProvider::sign_up", skip(self, password))]
    async fn sign_up(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Credential, IdentityProviderError> {
        let request = PasswordRequest {
            email: email.as_str(),
            password: password.expose(),
            return_secure_token: true,
        };
        let response: TokenResponse = self.call("accounts:signUp", &request).await?;

        Ok(Credential::new(response.id_token))
    }

    #[tracing::instrument(name = "RestIdentityProvider::sign_in", skip(self, password))]
    async fn sign_in(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<Credential, IdentityProviderError> {
        let request = PasswordRequest {
            email: email.as_str(),
            password: password.expose(),
            return_secure_token: true,
        };
        let response: TokenResponse = self.call("accounts:signInWithPassword", &request).await?;

        Ok(Credential::new(response.id_token))
    }

    #[tracing::instrument(name = "RestIdentityProvider::send_email_verification", skip_all)]
    async fn send_email_verification(
        &self,
        credential: &Credential,
    ) -> Result<(), IdentityProviderError> {
        let request = OobCodeRequest {
            request_type: "VERIFY_EMAIL",
            id_token: credential.expose(),
        };
        let _: IgnoredAny = self.call("accounts:sendOobCode", &request).await?;

        Ok(())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use sessiongate_core::{Credential, SessionSink, SessionSinkError};

use crate::config::routes;

/// Forwards credentials to the server's set-token endpoint.
///
/// The client should keep a cookie jar so the `Set-Cookie` replies stick.
#[derive(Clone)]
pub struct HttpSessionSink {
    client: reqwest::Client,
    endpoint: Arc<str>,
}

impl HttpSessionSink {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), routes::SET_TOKEN);
        Self {
            client,
            endpoint: Arc::from(endpoint),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SessionSink for HttpSessionSink {
    async fn forward(&self, credential: Option<Credential>) -> Result<(), SessionSinkError> {
        let body = serde_json::json!({
            "token": credential.as_ref().map(Credential::expose),
        });

        let response = self
            .client
            .post(&*self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| SessionSinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionSinkError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}

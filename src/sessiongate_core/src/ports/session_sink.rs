use async_trait::async_trait;
use thiserror::Error;

use crate::Credential;

#[derive(Debug, Error)]
pub enum SessionSinkError {
    #[error("Session endpoint rejected the token with status {0}")]
    Rejected(u16),
    #[error("Failed to reach session endpoint: {0}")]
    Transport(String),
}

/// Where a client pushes its current credential so the server can mirror it
/// into the session cookie. `None` means "signed out".
#[async_trait]
pub trait SessionSink: Clone + Send + Sync + 'static {
    async fn forward(&self, credential: Option<Credential>) -> Result<(), SessionSinkError>;
}

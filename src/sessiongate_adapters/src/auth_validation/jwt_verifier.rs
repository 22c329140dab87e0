use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode,
    errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use sessiongate_core::{Claims, Credential, TokenVerifier, VerificationError};

use super::jwks::JwksKeySource;

/// Where signing keys come from.
#[derive(Clone)]
pub enum TrustRoot {
    /// HMAC secret shared with the issuer. Used by the in-memory provider.
    SharedSecret(Secret<String>),
    /// The provider's published JSON Web Key Set.
    Jwks(JwksKeySource),
}

#[derive(Debug, Clone)]
pub struct JwtVerifierConfig {
    pub algorithms: Vec<Algorithm>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub leeway_seconds: u64,
}

impl JwtVerifierConfig {
    /// Settings for tokens signed by a hosted provider (RSA keys from a JWKS).
    pub fn rs256() -> Self {
        Self {
            algorithms: vec![Algorithm::RS256],
            issuer: None,
            audience: None,
            leeway_seconds: 0,
        }
    }

    /// Settings for locally signed HMAC tokens.
    pub fn hs256() -> Self {
        Self {
            algorithms: vec![Algorithm::HS256],
            ..Self::rs256()
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_leeway(mut self, leeway_seconds: u64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    fn validation(&self) -> Validation {
        let first = self.algorithms.first().copied().unwrap_or(Algorithm::RS256);
        let mut validation = Validation::new(first);
        validation.algorithms = self.algorithms.clone();
        validation.leeway = self.leeway_seconds;

        // A configured iss/aud is only enforced when the claim is also required.
        let mut required = vec!["exp", "sub"];
        match &self.audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        validation.set_required_spec_claims(&required);

        validation
    }
}

/// Verifies provider-issued JWTs: signature, expiry, issuer/audience and the
/// `email_verified` claim.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    trust_root: TrustRoot,
    validation: Arc<Validation>,
}

impl JwtTokenVerifier {
    pub fn new(trust_root: TrustRoot, config: &JwtVerifierConfig) -> Self {
        Self {
            trust_root,
            validation: Arc::new(config.validation()),
        }
    }

    pub fn with_shared_secret(secret: Secret<String>, config: &JwtVerifierConfig) -> Self {
        Self::new(TrustRoot::SharedSecret(secret), config)
    }

    pub fn with_jwks(source: JwksKeySource, config: &JwtVerifierConfig) -> Self {
        Self::new(TrustRoot::Jwks(source), config)
    }

    async fn decoding_key(&self, token: &str) -> Result<DecodingKey, VerificationError> {
        match &self.trust_root {
            TrustRoot::SharedSecret(secret) => {
                Ok(DecodingKey::from_secret(secret.expose_secret().as_bytes()))
            }
            TrustRoot::Jwks(source) => {
                let header = decode_header(token).map_err(|error| {
                    tracing::debug!(%error, "Malformed credential header");
                    VerificationError::Invalid
                })?;
                let kid = header.kid.ok_or_else(|| {
                    tracing::debug!("Credential header has no key id");
                    VerificationError::Invalid
                })?;

                source.decoding_key(&kid).await.map_err(|error| {
                    tracing::warn!(%error, "No usable signing key for credential");
                    VerificationError::Invalid
                })
            }
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    #[tracing::instrument(name = "JwtTokenVerifier::verify", skip_all)]
    async fn verify(&self, credential: &Credential) -> Result<Claims, VerificationError> {
        let token = credential.expose();
        let key = self.decoding_key(token).await?;

        let claims = decode::<Claims>(token, &key, &self.validation)
            .map(|data| data.claims)
            .map_err(classify)?;

        if claims.sub.is_empty() {
            tracing::debug!("Credential has an empty subject");
            return Err(VerificationError::Invalid);
        }
        if !claims.email_verified {
            return Err(VerificationError::Unverified);
        }

        Ok(claims)
    }
}

fn classify(error: jsonwebtoken::errors::Error) -> VerificationError {
    match error.kind() {
        ErrorKind::ExpiredSignature => VerificationError::Expired,
        _ => {
            tracing::debug!(%error, "Credential failed verification");
            VerificationError::Invalid
        }
    }
}

/// Sign `claims` as an HS256 JWT.
pub fn sign_claims(
    claims: &Claims,
    secret: &[u8],
    kid: Option<&str>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = kid.map(str::to_string);

    encode(&header, claims, &EncodingKey::from_secret(secret))
}

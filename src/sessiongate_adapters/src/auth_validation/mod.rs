pub mod jwks;
pub mod jwt_verifier;

pub use jwks::{JwksError, JwksKeySource};
pub use jwt_verifier::{JwtTokenVerifier, JwtVerifierConfig, TrustRoot, sign_claims};

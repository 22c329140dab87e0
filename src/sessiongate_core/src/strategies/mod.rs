pub mod cookie_store;
pub mod token_verifier;

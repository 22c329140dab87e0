pub mod identity_provider;
pub mod session_sink;

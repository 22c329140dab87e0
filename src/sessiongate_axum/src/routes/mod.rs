//! Axum routes for the session API.
//!
//! Each route extracts with axum, calls the framework-agnostic handler in
//! `sessiongate_adapters::handlers` and converts the result.

pub mod error;
pub mod login;
pub mod logout;
pub mod session;
pub mod set_token;
pub mod signup;

pub use error::RouteError;
pub use login::login;
pub use logout::logout;
pub use session::session;
pub use set_token::set_token;
pub use signup::signup;

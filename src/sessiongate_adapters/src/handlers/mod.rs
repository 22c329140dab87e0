//! Framework-agnostic session handlers.
//!
//! Each handler takes already-deserialized input plus a response builder and
//! returns a finished response. Framework routes only extract, call and
//! convert.

pub mod error;
pub mod login;
pub mod logout;
pub mod session;
pub mod set_token;
pub mod signup;

pub use error::ApiError;
pub use login::{LoginRequest, handle_login};
pub use logout::handle_logout;
pub use session::handle_session;
pub use set_token::{SetTokenRequest, handle_set_token};
pub use signup::{SignupRequest, handle_signup};

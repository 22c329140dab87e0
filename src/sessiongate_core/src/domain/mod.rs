pub mod claims;
pub mod credential;
pub mod email;
pub mod password;
pub mod token_change;

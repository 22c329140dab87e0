pub mod cookie_store;

pub use cookie_store::{CookieSessionStore, CookieSettings};

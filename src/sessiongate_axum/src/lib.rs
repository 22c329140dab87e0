//! Axum integration for the session gate.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_core: HTTP trait definitions│
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_axum                        │
//! │  - AxumRequest / AxumResponseBuilder     │
//! │  - session API routes                    │
//! │  - route guard middleware                │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, middleware, routing::post};
//! use sessiongate_axum::{SessionState, middleware::route_guard, routes};
//!
//! let api = Router::new()
//!     .route("/api/login", post(routes::login::<P, V, C>))
//!     .with_state(state);
//! let app = api.layer(middleware::from_fn_with_state(guard, route_guard::<V, C>));
//! ```

pub mod adapters;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use extract::CurrentUser;
pub use state::SessionState;

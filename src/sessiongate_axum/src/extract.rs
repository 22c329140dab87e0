use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use sessiongate_core::Claims;

/// Claims of the user the route guard let through.
///
/// Only present on protected paths; extracting it elsewhere is rejected
/// with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

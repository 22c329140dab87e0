use axum::response::{IntoResponse, Response};
use sessiongate_adapters::handlers::ApiError;
use thiserror::Error;

use crate::adapters::response_builder;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct RouteError(#[from] pub ApiError);

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        self.0.into_response(response_builder())
    }
}

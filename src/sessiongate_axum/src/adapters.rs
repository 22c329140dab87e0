//! `AuthRequest` and `AuthResponseBuilder` for axum's types.
//!
//! Newtype wrappers get around the orphan rule; `AxumRequest` is
//! `repr(transparent)` so wrapping a request costs nothing.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Response, StatusCode};
use sessiongate_core::{AuthRequest, AuthResponseBuilder};

#[repr(transparent)]
pub struct AxumRequest(pub Request);

impl From<Request> for AxumRequest {
    fn from(request: Request) -> Self {
        AxumRequest(request)
    }
}

impl From<AxumRequest> for Request {
    fn from(wrapper: AxumRequest) -> Self {
        wrapper.0
    }
}

impl AuthRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers().get(name)?.to_str().ok()
    }

    /// Browsers may send several `Cookie` headers; all of them are searched.
    fn cookie(&self, name: &str) -> Option<&str> {
        self.0
            .headers()
            .get_all(axum::http::header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    fn method(&self) -> &str {
        self.0.method().as_str()
    }

    fn path(&self) -> &str {
        self.0.uri().path()
    }
}

pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    /// Appends, so repeated `Set-Cookie` headers all survive.
    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|error| {
            tracing::error!(%error, "Failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}

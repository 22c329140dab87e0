//! Zero-cost HTTP abstraction traits for the session layer.
//!
//! Frameworks implement these traits directly on their own types (via newtype
//! wrappers), so cookie handling and route guarding never allocate or copy the
//! request.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_core: Defines HTTP traits   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  sessiongate_axum: Newtype wrappers      │
//! │  struct AxumRequest(axum::Request)       │
//! │  impl AuthRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  Cookie store / route guard use the      │
//! │  trait methods (generic over framework)  │
//! └──────────────────────────────────────────┘
//! ```

/// Trait for HTTP requests inspected by the session layer.
///
/// Return `&str` references straight from the framework's own data
/// structures. Header lookup must be case-insensitive.
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a cookie value by name from the `Cookie` header.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;
}

/// Trait for building HTTP responses.
///
/// Builder-style, so calls chain:
/// ```ignore
/// builder
///     .status(200)
///     .cookie("token=abc; HttpOnly; Path=/; Max-Age=86400")
///     .json_body(json!({"success": true}))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header. Repeated calls append rather than replace.
    fn header(self, name: &str, value: &str) -> Self;

    /// Add a Set-Cookie header
    ///
    /// The cookie_value should be a complete cookie string like:
    /// `"token=abc; HttpOnly; Secure; SameSite=Lax; Path=/; Max-Age=86400"`
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set a JSON body along with the `Content-Type: application/json` header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Shorthands for the responses the session endpoints produce.
///
/// Implemented for every `AuthResponseBuilder`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// 200 OK with a JSON body
    fn ok_json(self, body: serde_json::Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }

    /// 200 OK with `{"success": true}`
    fn success(self) -> Self::Response {
        self.ok_json(serde_json::json!({ "success": true }))
    }

    /// 400 Bad Request
    fn bad_request(self, message: &str) -> Self::Response {
        self.error(400, message)
    }

    /// 401 Unauthorized
    fn unauthorized(self, message: &str) -> Self::Response {
        self.error(401, message)
    }

    /// 403 Forbidden
    fn forbidden(self, message: &str) -> Self::Response {
        self.error(403, message)
    }

    /// 500 Internal Server Error
    fn internal_error(self, message: &str) -> Self::Response {
        self.error(500, message)
    }

    /// Any status with `{"error": message}`
    fn error(self, code: u16, message: &str) -> Self::Response {
        self.status(code)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }

    /// 307 Temporary Redirect, keeps the request method
    fn redirect(self, location: &str) -> Self::Response {
        self.status(307).header("location", location).build()
    }
}

impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}

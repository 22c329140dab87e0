//! Framework-free request/response doubles for adapter tests.

use sessiongate_core::{AuthRequest, AuthResponseBuilder};

#[derive(Debug, Default)]
pub struct RecordingBuilder {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RecordingBuilder {
    pub fn set_cookies(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("set-cookie"))
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

impl AuthResponseBuilder for RecordingBuilder {
    type Response = Self;

    fn status(mut self, code: u16) -> Self {
        self.status = code;
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    fn build(self) -> Self::Response {
        self
    }
}

pub struct TestRequest {
    path: String,
    cookie_header: Option<String>,
}

impl TestRequest {
    pub fn get(path: &str) -> Self {
        Self {
            path: path.to_string(),
            cookie_header: None,
        }
    }

    pub fn with_cookie(mut self, header: &str) -> Self {
        self.cookie_header = Some(header.to_string());
        self
    }
}

impl AuthRequest for TestRequest {
    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case("cookie") {
            self.cookie_header.as_deref()
        } else {
            None
        }
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookie_header
            .as_deref()?
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    fn method(&self) -> &str {
        "GET"
    }

    fn path(&self) -> &str {
        &self.path
    }
}

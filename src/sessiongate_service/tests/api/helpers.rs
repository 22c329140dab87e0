use fake::{Fake, faker::internet::en::SafeEmail};
use reqwest::{Response, header::SET_COOKIE, redirect::Policy};
use secrecy::Secret;
use sessiongate_adapters::{CookieSessionStore, InMemoryIdentityProvider, config::test};
use sessiongate_core::{Email, IdentityProvider, Password, ProtectedPaths};
use sessiongate_service::{SessionService, default_pages};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub provider: InMemoryIdentityProvider,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_token_ttl(60 * 60).await
    }

    pub async fn with_token_ttl(seconds: i64) -> Self {
        Self::spawn(seconds, ProtectedPaths::new(["/dashboard"])).await
    }

    pub async fn with_protected_paths(protected: ProtectedPaths) -> Self {
        Self::spawn(60 * 60, protected).await
    }

    async fn spawn(token_ttl_seconds: i64, protected: ProtectedPaths) -> Self {
        let provider = InMemoryIdentityProvider::new(Secret::new(Uuid::new_v4().to_string()))
            .with_token_ttl(token_ttl_seconds);

        let service = SessionService::new(
            provider.clone(),
            provider.verifier(),
            CookieSessionStore::default(),
            protected,
            "/login",
        )
        .with_pages(default_pages());

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            service.run_standalone(listener, &[]).await.unwrap();
        });

        // No cookie jar: every test passes cookies explicitly.
        let http_client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            provider,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut request = self.http_client.get(self.url(path));
        if let Some(cookie) = cookie {
            request = request.header("cookie", cookie);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Response {
        self.http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_set_token(&self, token: Option<&str>) -> Response {
        self.post_json("/api/set-token", &serde_json::json!({ "token": token }))
            .await
    }

    pub async fn post_logout(&self) -> Response {
        self.http_client
            .post(self.url("/api/logout"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_signup(&self, email: &str, password: &str) -> Response {
        self.post_json(
            "/api/signup",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn post_login(&self, email: &str, password: &str) -> Response {
        self.post_json(
            "/api/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn get_session(&self, cookie: Option<&str>) -> Response {
        self.get("/api/session", cookie).await
    }

    /// Create an account directly on the provider.
    pub async fn register(&self, verified: bool) -> String {
        let address: String = SafeEmail().fake();
        let email = Email::try_from(address.as_str()).unwrap();
        let password = Password::try_from(Secret::new(PASSWORD.to_string())).unwrap();

        self.provider.sign_up(&email, &password).await.unwrap();
        if verified {
            self.provider.verify_email(&email).await.unwrap();
        }
        address
    }

    /// A credential for a fresh account, as the provider would hand it out.
    pub async fn issue_token(&self, verified: bool) -> String {
        let address = self.register(verified).await;
        let email = Email::try_from(address.as_str()).unwrap();
        let password = Password::try_from(Secret::new(PASSWORD.to_string())).unwrap();

        let credential = self.provider.sign_in(&email, &password).await.unwrap();
        credential.expose().to_string()
    }
}

/// Every `Set-Cookie` header on the response.
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// `name=value` of the session cookie set by the response, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .filter_map(|cookie| cookie.split(';').next().map(str::to_string))
        .find(|pair| pair.starts_with("token=") && pair.len() > "token=".len())
}

pub fn location(response: &Response) -> Option<&str> {
    response.headers().get("location")?.to_str().ok()
}

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use sessiongate_adapters::{
    CookieSessionStore,
    config::{Settings, routes},
};
use sessiongate_application::RouteGuard;
use sessiongate_axum::{SessionState, middleware::route_guard, routes as api_routes};
use sessiongate_core::{IdentityProvider, ProtectedPaths, SessionCookieStore, TokenVerifier};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

type GuardLayer = Box<dyn FnOnce(Router) -> Router + Send>;

/// The session API, host pages and static assets behind the route guard.
pub struct SessionService {
    api: Router,
    pages: Router,
    assets_dir: Option<String>,
    guard: GuardLayer,
}

impl SessionService {
    /// Build the service around one provider, verifier and cookie store.
    ///
    /// The route guard shares the verifier and cookie store with the API
    /// routes, so a cookie written by `/api/login` is read back the same way
    /// on protected pages.
    pub fn new<P, V, C>(
        provider: P,
        verifier: V,
        cookies: C,
        protected: ProtectedPaths,
        login_path: &str,
    ) -> Self
    where
        P: IdentityProvider,
        V: TokenVerifier,
        C: SessionCookieStore,
    {
        let guard = RouteGuard::new(verifier.clone(), cookies.clone(), protected, login_path);
        let state = SessionState::new(provider, verifier, cookies);

        let api = Router::new()
            .route(routes::SET_TOKEN, post(api_routes::set_token::<P, V, C>))
            .route(routes::LOGOUT, post(api_routes::logout::<P, V, C>))
            .route(routes::SIGNUP, post(api_routes::signup::<P, V, C>))
            .route(routes::LOGIN, post(api_routes::login::<P, V, C>))
            .route(routes::SESSION, get(api_routes::session::<P, V, C>))
            .with_state(state);

        Self {
            api,
            pages: Router::new(),
            assets_dir: None,
            guard: Box::new(move |router| {
                router.layer(from_fn_with_state(guard, route_guard::<V, C>))
            }),
        }
    }

    /// Build the service from loaded settings, with cookies configured there.
    pub fn from_settings<P, V>(provider: P, verifier: V, settings: &Settings) -> Self
    where
        P: IdentityProvider,
        V: TokenVerifier,
    {
        let service = Self::new(
            provider,
            verifier,
            CookieSessionStore::new(settings.cookie_settings()),
            settings.protected_paths(),
            &settings.session.login_path,
        );

        match &settings.app.assets_dir {
            Some(dir) => service.with_assets(dir.clone()),
            None => service,
        }
    }

    /// Merge host pages. Protected ones are guarded like everything else.
    pub fn with_pages(mut self, pages: Router) -> Self {
        self.pages = self.pages.merge(pages);
        self
    }

    /// Serve a static bundle for any unmatched path, falling back to its
    /// `index.html`.
    pub fn with_assets(mut self, assets_dir: impl Into<String>) -> Self {
        self.assets_dir = Some(assets_dir.into());
        self
    }

    pub fn as_router(self, allowed_origins: &[String]) -> Router {
        let mut router = self.api.merge(self.pages);

        if let Some(dir) = self.assets_dir {
            let index = format!("{}/index.html", dir.trim_end_matches('/'));
            router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
        }

        let mut router = (self.guard)(router);

        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring malformed CORS origin");
                    None
                }
            })
            .collect();

        if !origins.is_empty() {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::list(origins));
            router = router.layer(cors);
        }

        router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        )
    }

    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: &[String],
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origins);

        tracing::info!("Session service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}

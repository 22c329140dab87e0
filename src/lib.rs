//! # Sessiongate
//!
//! Session-cookie authentication in front of an external identity provider.
//! This facade re-exports the public API of every layer.
//!
//! ## Structure
//!
//! - **Core domain types**: `Credential`, `Claims`, `Email`, `Password`, `TokenChange`
//! - **Strategies and ports**: `TokenVerifier`, `SessionCookieStore`, `IdentityProvider`, `SessionSink`
//! - **Application**: `RouteGuard`, `SessionRefresher`, `LoginUseCase`, `SignupUseCase`
//! - **Adapters**: `JwtTokenVerifier`, `CookieSessionStore`, `RestIdentityProvider`, `ProviderApp`, ...
//! - **Service**: `SessionService`, the ready-to-serve axum application

// ============================================================================
// Core Domain Types
// ============================================================================

pub mod core {
    pub use sessiongate_core::*;
}

pub use sessiongate_core::{
    Claims, Credential, Email, EmailError, Password, PasswordError, ProtectedPaths, SessionError,
    TokenChange,
};

// ============================================================================
// Strategies and Ports
// ============================================================================

pub use sessiongate_core::{
    IdentityProvider, IdentityProviderError, SessionCookieStore, SessionSink, SessionSinkError,
    TokenVerifier, VerificationError,
};

// ============================================================================
// Application Layer
// ============================================================================

pub mod application {
    pub use sessiongate_application::*;
}

pub use sessiongate_application::{
    GuardOutcome, LoginUseCase, RefresherHandle, RouteGuard, SessionRefresher, SignupUseCase,
    TokenChangeSource,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

pub mod adapters {
    pub mod auth {
        pub use sessiongate_adapters::auth_validation::*;
    }

    pub mod config {
        pub use sessiongate_adapters::config::*;
    }

    pub mod handlers {
        pub use sessiongate_adapters::handlers::*;
    }

    pub mod identity {
        pub use sessiongate_adapters::identity::*;
    }
}

pub use sessiongate_adapters::{
    CookieSessionStore, HttpSessionSink, InMemoryIdentityProvider, JwtTokenVerifier, ProviderApp,
    RestIdentityProvider, config::Settings,
};

// ============================================================================
// Axum Integration and Service
// ============================================================================

pub mod axum_integration {
    pub use sessiongate_axum::*;
}

pub use sessiongate_axum::CurrentUser;
pub use sessiongate_service::{SessionService, default_pages};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

pub use async_trait::async_trait;

pub use secrecy::{ExposeSecret, Secret};

pub use http;

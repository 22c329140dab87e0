pub mod route_guard;
pub mod session_refresher;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use route_guard::{GuardOutcome, GuardState, RouteGuard, SESSION_API_PREFIX};
pub use session_refresher::{RefresherHandle, SessionRefresher, TokenChangeSource};
pub use use_cases::{
    login::{LoginError, LoginResponse, LoginUseCase},
    signup::{SignupError, SignupUseCase},
};

pub mod env {
    pub const ENV_PREFIX: &str = "SESSIONGATE";
    pub const CONFIG_FILE_ENV_VAR: &str = "SESSIONGATE_CONFIG";
    pub const PROVIDER_API_KEY_ENV_VAR: &str = "PROVIDER_API_KEY";
    pub const PROVIDER_PROJECT_ID_ENV_VAR: &str = "PROVIDER_PROJECT_ID";
    pub const PROVIDER_SERVICE_ACCOUNT_ENV_VAR: &str = "PROVIDER_SERVICE_ACCOUNT";
}

pub const DEFAULT_CONFIG_FILE: &str = "sessiongate";

pub mod session {
    pub const COOKIE_NAME: &str = "token";
    pub const COOKIE_PATH: &str = "/";
    pub const COOKIE_MAX_AGE_SECONDS: i64 = 24 * 60 * 60;
    pub const LOGIN_PATH: &str = "/login";
    pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard"];
}

pub mod routes {
    pub const SET_TOKEN: &str = "/api/set-token";
    pub const LOGOUT: &str = "/api/logout";
    pub const LOGIN: &str = "/api/login";
    pub const SIGNUP: &str = "/api/signup";
    pub const SESSION: &str = "/api/session";
}

pub mod provider {
    use std::time::Duration;

    pub const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com";
    pub const JWKS_URL: &str =
        "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
    pub const ISSUER_PREFIX: &str = "https://securetoken.google.com/";
    pub const JWKS_CACHE_SECONDS: i64 = 60 * 60;
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}

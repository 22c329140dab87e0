use std::time::Duration;

use sessiongate_core::ProtectedPaths;

use crate::helpers::{PASSWORD, TestApp, location, session_cookie};

#[tokio::test]
async fn protected_path_without_cookie_redirects_to_login() {
    let app = TestApp::new().await;

    for path in ["/dashboard", "/dashboard/settings"] {
        let response = app.get(path, None).await;

        assert_eq!(response.status().as_u16(), 307, "{path}");
        assert_eq!(location(&response), Some("/login"), "{path}");
    }
}

#[tokio::test]
async fn public_paths_are_not_guarded() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/", None).await.status().as_u16(), 200);
    assert_eq!(app.get("/login", None).await.status().as_u16(), 200);
    // Shares a prefix with a protected path but is not under it.
    assert_eq!(app.get("/dashboards", None).await.status().as_u16(), 404);
}

#[tokio::test]
async fn root_prefix_still_lets_users_sign_in() {
    let app = TestApp::with_protected_paths(ProtectedPaths::new(["/"])).await;
    let email = app.register(true).await;

    assert_eq!(app.get("/login", None).await.status().as_u16(), 200);
    let response = app.get("/", None).await;
    assert_eq!(response.status().as_u16(), 307);
    assert_eq!(location(&response), Some("/login"));

    let response = app.post_login(&email, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);
    let cookie = session_cookie(&response).expect("login sets the session cookie");

    let response = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn verified_cookie_is_allowed() {
    let app = TestApp::new().await;
    let token = app.issue_token(true).await;

    let response = app.get("/dashboard", Some(&format!("token={token}"))).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Signed in as"));
}

#[tokio::test]
async fn invalid_or_unverified_cookie_redirects() {
    let app = TestApp::new().await;
    let unverified = app.issue_token(false).await;

    let test_cases = [
        "token=not-a-jwt".to_string(),
        "token=".to_string(),
        format!("token={unverified}"),
    ];

    for cookie in test_cases {
        let response = app.get("/dashboard", Some(&cookie)).await;
        assert_eq!(response.status().as_u16(), 307, "cookie {cookie:?}");
        assert_eq!(location(&response), Some("/login"));
    }
}

#[tokio::test]
async fn expired_cookie_redirects() {
    let app = TestApp::with_token_ttl(-60).await;
    let token = app.issue_token(true).await;

    let response = app.get("/dashboard", Some(&format!("token={token}"))).await;

    assert_eq!(response.status().as_u16(), 307);
}

#[tokio::test]
async fn credential_expiring_mid_session_redirects_next_request() {
    let app = TestApp::with_token_ttl(2).await;
    let cookie = format!("token={}", app.issue_token(true).await);

    let before = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(before.status().as_u16(), 200);

    tokio::time::sleep(Duration::from_millis(3_100)).await;

    let after = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(after.status().as_u16(), 307);
    assert_eq!(location(&after), Some("/login"));
}

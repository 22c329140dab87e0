use crate::helpers::{PASSWORD, TestApp, session_cookie, set_cookies};

#[tokio::test]
async fn verified_user_gets_a_session_cookie() {
    let app = TestApp::new().await;
    let email = app.register(true).await;

    let response = app.post_login(&email, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 200);
    let cookie = session_cookie(&response).expect("login should set the session cookie");

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let dashboard = app.get("/dashboard", Some(&cookie)).await;
    assert_eq!(dashboard.status().as_u16(), 200);
}

#[tokio::test]
async fn unverified_user_gets_no_cookie() {
    let app = TestApp::new().await;
    let email = app.register(false).await;

    let response = app.post_login(&email, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 403);
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn wrong_credentials_get_a_generic_error() {
    let app = TestApp::new().await;
    let email = app.register(true).await;

    let test_cases = [
        (email.as_str(), "wrong-password"),
        ("nobody@example.com", PASSWORD),
        ("not-an-email", PASSWORD),
    ];

    for (email, password) in test_cases {
        let response = app.post_login(email, password).await;
        assert_eq!(response.status().as_u16(), 401);
        assert!(set_cookies(&response).is_empty());

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid email or password");
    }
}

use fake::{Fake, faker::internet::en::SafeEmail};
use sessiongate_core::Email;

use crate::helpers::{PASSWORD, TestApp, set_cookies};

#[tokio::test]
async fn signup_sends_verification_and_sets_no_cookie() {
    let app = TestApp::new().await;
    let address: String = SafeEmail().fake();

    let response = app.post_signup(&address, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 201);
    assert!(set_cookies(&response).is_empty());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().is_some());

    let email = Email::try_from(address.as_str()).unwrap();
    assert!(app.provider.verification_requested(&email).await);
}

#[tokio::test]
async fn signup_then_login_without_verifying_is_refused() {
    let app = TestApp::new().await;
    let address: String = SafeEmail().fake();

    app.post_signup(&address, PASSWORD).await;
    let response = app.post_login(&address, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 403);
    assert!(set_cookies(&response).is_empty());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["error"],
        "Please verify your email before logging in."
    );
}

#[tokio::test]
async fn duplicate_signup_conflicts() {
    let app = TestApp::new().await;
    let address: String = SafeEmail().fake();

    app.post_signup(&address, PASSWORD).await;
    let response = app.post_signup(&address, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn invalid_input_is_a_bad_request() {
    let app = TestApp::new().await;

    let test_cases = [("not-an-email", PASSWORD), ("someone@example.com", "123")];

    for (email, password) in test_cases {
        let response = app.post_signup(email, password).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "signup with {email:?} should be rejected"
        );
    }
}

use crate::helpers::TestApp;

#[tokio::test]
async fn session_describes_the_signed_in_user() {
    let app = TestApp::new().await;
    let token = app.issue_token(true).await;

    let response = app.get_session(Some(&format!("token={token}"))).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["uid"].as_str().is_some_and(|uid| !uid.is_empty()));
    assert!(body["email"].as_str().is_some());
    assert_eq!(body["emailVerified"], true);
    assert!(body["expiresAt"].as_u64().is_some());
}

#[tokio::test]
async fn session_without_valid_cookie_is_unauthorized() {
    let app = TestApp::new().await;
    let unverified = app.issue_token(false).await;

    let test_cases = [
        None,
        Some("token=garbage".to_string()),
        Some(format!("token={unverified}")),
    ];

    for cookie in test_cases {
        let response = app.get_session(cookie.as_deref()).await;
        assert_eq!(
            response.status().as_u16(),
            401,
            "cookie {cookie:?} should not describe a session"
        );
    }
}

use crate::helpers::{TestApp, set_cookies};

#[tokio::test]
async fn set_token_writes_session_cookie() {
    let app = TestApp::new().await;

    let response = app.post_set_token(Some("opaque.token.value")).await;

    assert_eq!(response.status().as_u16(), 200);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("token=opaque.token.value"));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[0].contains("SameSite=Lax"));
    assert!(cookies[0].contains("Path=/"));
    assert!(cookies[0].contains("Max-Age=86400"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn null_token_always_clears_the_cookie() {
    let app = TestApp::new().await;

    let response = app.post_set_token(None).await;

    assert_eq!(response.status().as_u16(), 200);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("token=;"));
    assert!(cookies[0].contains("Max-Age=0"));
}

#[tokio::test]
async fn later_token_overwrites_earlier_one() {
    let app = TestApp::new().await;

    let first = app.post_set_token(Some("first")).await;
    let second = app.post_set_token(Some("second")).await;

    assert!(set_cookies(&first)[0].starts_with("token=first"));
    let cookies = set_cookies(&second);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("token=second"));
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/api/set-token", &serde_json::json!({ "token": 42 }))
        .await;

    assert!(response.status().is_client_error());
    assert!(set_cookies(&response).is_empty());
}

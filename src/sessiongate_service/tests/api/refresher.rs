use std::time::Duration;

use secrecy::Secret;
use sessiongate_adapters::HttpSessionSink;
use sessiongate_application::SessionRefresher;
use sessiongate_core::{Email, IdentityProvider, Password};

use crate::helpers::{PASSWORD, TestApp};

/// Poll the session endpoint with the browser's cookie jar until it reports
/// the expected status.
async fn wait_for_session_status(app: &TestApp, browser: &reqwest::Client, expected: u16) {
    for _ in 0..50 {
        let response = browser.get(app.url("/api/session")).send().await.unwrap();
        if response.status().as_u16() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("session never reached status {expected}");
}

#[tokio::test]
async fn refresher_mirrors_provider_changes_into_the_cookie() {
    let app = TestApp::new().await;
    let address = app.register(true).await;
    let email = Email::try_from(address.as_str()).unwrap();
    let password = Password::try_from(Secret::new(PASSWORD.to_string())).unwrap();

    // Plays the browser: keeps whatever cookie the server sets.
    let browser = reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let sink = HttpSessionSink::new(browser.clone(), &app.address);
    let refresher = SessionRefresher::start(&app.provider, sink);

    app.provider.sign_in(&email, &password).await.unwrap();
    wait_for_session_status(&app, &browser, 200).await;

    let dashboard = browser.get(app.url("/dashboard")).send().await.unwrap();
    assert_eq!(dashboard.status().as_u16(), 200);

    app.provider.renew(&email).await.unwrap();
    // Overlapping forwards are not ordered; let the renewal land first.
    tokio::time::sleep(Duration::from_millis(200)).await;
    wait_for_session_status(&app, &browser, 200).await;

    app.provider.sign_out();
    wait_for_session_status(&app, &browser, 401).await;

    let dashboard = browser.get(app.url("/dashboard")).send().await.unwrap();
    assert_eq!(dashboard.status().as_u16(), 307);

    refresher.stop().await;
}

#[tokio::test]
async fn stopped_refresher_no_longer_forwards() {
    let app = TestApp::new().await;
    let address = app.register(true).await;
    let email = Email::try_from(address.as_str()).unwrap();
    let password = Password::try_from(Secret::new(PASSWORD.to_string())).unwrap();

    let browser = reqwest::Client::builder().cookie_store(true).build().unwrap();
    let sink = HttpSessionSink::new(browser.clone(), &app.address);

    SessionRefresher::start(&app.provider, sink).stop().await;

    app.provider.sign_in(&email, &password).await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let response = browser.get(app.url("/api/session")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

//! Select, fetch, display, and close through the full stack

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cyberelement_engine::cyberelement_providers::GeminiClient;
use cyberelement_engine::{
    App, DetailField, DetailOrigin, FetchErrorKind, ModelName, SelectionState, UiOptions,
    element_by_number,
};

use crate::common::{
    client_for, detail_json, gemini_text_body, mount_generate_status, mount_generate_text,
};

fn app_for(server: &MockServer) -> App<GeminiClient> {
    App::new(
        Arc::new(client_for(server)),
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ModelName::default(),
    )
}

/// Tick until the current fetch lands.
async fn wait_loaded(app: &mut App<GeminiClient>) {
    for _ in 0..500 {
        app.tick();
        if !app.is_loading() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("fetch did not complete");
}

#[tokio::test]
async fn carbon_is_fetched_shown_and_closed() {
    let server = MockServer::start().await;
    mount_generate_text(&server, &detail_json("D", "S", "U", "F")).await;
    let mut app = app_for(&server);

    let carbon = element_by_number(6).unwrap();
    app.select(carbon);
    assert!(app.is_loading());
    assert_eq!(app.selected().unwrap().symbol, "C");

    wait_loaded(&mut app).await;

    match app.state() {
        SelectionState::Loaded {
            element,
            detail,
            origin,
            reveal,
        } => {
            assert_eq!(element.number, 6);
            assert_eq!(*origin, DetailOrigin::Remote);
            assert!(reveal.is_complete());
            assert_eq!(reveal.visible(detail, DetailField::Description), "D");
            assert_eq!(detail.fun_fact(), "F");
        }
        other => panic!("unexpected state: {other:?}"),
    }

    app.close();
    assert!(matches!(app.state(), SelectionState::Idle));
    assert!(app.selected().is_none());
}

#[tokio::test]
async fn quota_error_shows_fallback() {
    let server = MockServer::start().await;
    mount_generate_status(&server, 429, "slow down").await;
    let mut app = app_for(&server);

    app.select(element_by_number(79).unwrap());
    wait_loaded(&mut app).await;

    assert!(app.detail().unwrap().is_fallback());
    assert_eq!(
        app.state().origin(),
        Some(DetailOrigin::Fallback(FetchErrorKind::Quota))
    );
}

#[tokio::test]
async fn later_selection_wins_over_slow_earlier_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Oxygen (O)"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_text_body(&detail_json("oxygen", "s", "u", "f")))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("Hydrogen (H)"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_text_body(&detail_json("hydrogen", "s", "u", "f"))),
        )
        .mount(&server)
        .await;
    let mut app = app_for(&server);

    app.select(element_by_number(8).unwrap());
    app.select(element_by_number(1).unwrap());
    wait_loaded(&mut app).await;
    assert_eq!(app.detail().unwrap().description(), "hydrogen");

    tokio::time::sleep(Duration::from_millis(400)).await;
    app.tick();
    assert_eq!(app.selected().unwrap().symbol, "H");
    assert_eq!(app.detail().unwrap().description(), "hydrogen");
}

#[tokio::test]
async fn closing_mid_fetch_stays_idle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_text_body(&detail_json("late", "s", "u", "f")))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;
    let mut app = app_for(&server);

    app.select(element_by_number(26).unwrap());
    app.close();
    tokio::time::sleep(Duration::from_millis(200)).await;
    app.tick();
    assert!(matches!(app.state(), SelectionState::Idle));
}

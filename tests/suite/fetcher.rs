//! Detail fetching against a mock Gemini endpoint

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cyberelement_engine::cyberelement_providers::{
    ApiConfig, FetchErrorKind, GeminiClient, fetch_details, try_fetch_details,
};
use cyberelement_types::{DetailRecord, element_by_symbol};

use crate::common::{
    TEST_KEY, client_for, detail_json, gemini_text_body, mount_generate_status,
    mount_generate_text,
};

#[tokio::test]
async fn fetch_returns_parsed_detail() {
    let server = MockServer::start().await;
    mount_generate_text(
        &server,
        &detail_json("碳是生命的骨架。", "钻石", "钢铁冶炼", "石墨烯只有一个原子厚。"),
    )
    .await;

    let carbon = element_by_symbol("C").unwrap();
    let detail = fetch_details(&client_for(&server), carbon).await;

    assert_eq!(detail.description(), "碳是生命的骨架。");
    assert_eq!(detail.substance(), "钻石");
    assert_eq!(detail.usage(), "钢铁冶炼");
    assert_eq!(detail.fun_fact(), "石墨烯只有一个原子厚。");
    assert!(!detail.is_fallback());
}

#[tokio::test]
async fn request_names_element_and_demands_structured_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", TEST_KEY))
        .and(body_string_contains("Carbon (C)"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "required": ["description", "usage", "substance", "funFact"]
                }
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_text_body(&detail_json("d", "s", "u", "f"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let carbon = element_by_symbol("C").unwrap();
    let detail = try_fetch_details(&client_for(&server), carbon)
        .await
        .unwrap();
    assert_eq!(detail, DetailRecord::new("d", "s", "u", "f"));
}

#[tokio::test]
async fn unparsable_text_falls_back() {
    let server = MockServer::start().await;
    mount_generate_text(&server, "Carbon is neat.").await;

    let carbon = element_by_symbol("C").unwrap();
    let client = client_for(&server);

    let err = try_fetch_details(&client, carbon).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Malformed);
    assert_eq!(fetch_details(&client, carbon).await, DetailRecord::fallback());
}

#[tokio::test]
async fn missing_field_is_malformed() {
    let server = MockServer::start().await;
    mount_generate_text(
        &server,
        &json!({"description": "d", "substance": "s", "usage": "u"}).to_string(),
    )
    .await;

    let oxygen = element_by_symbol("O").unwrap();
    let err = try_fetch_details(&client_for(&server), oxygen)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Malformed);
}

#[tokio::test]
async fn blank_text_is_empty_response() {
    let server = MockServer::start().await;
    mount_generate_text(&server, "   ").await;

    let iron = element_by_symbol("Fe").unwrap();
    let err = try_fetch_details(&client_for(&server), iron)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::EmptyResponse);
}

#[tokio::test]
async fn rejected_key_falls_back() {
    let server = MockServer::start().await;
    mount_generate_status(&server, 403, r#"{"error":{"message":"bad key"}}"#).await;

    let gold = element_by_symbol("Au").unwrap();
    let client = client_for(&server);
    let err = try_fetch_details(&client, gold).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Auth);
    assert!(fetch_details(&client, gold).await.is_fallback());
}

#[tokio::test]
async fn no_key_falls_back_without_contacting_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::new(ApiConfig::new(None).with_base_url(server.uri())).unwrap();
    let neon = element_by_symbol("Ne").unwrap();
    assert!(fetch_details(&client, neon).await.is_fallback());
}

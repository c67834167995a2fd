//! Shared test utilities and fixtures
//!
//! Mock Gemini endpoints and client builders for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cyberelement_engine::cyberelement_providers::{ApiConfig, GeminiClient};
use cyberelement_types::ApiKey;

pub const TEST_KEY: &str = "test-key";

/// A `generateContent` success body carrying `text` as the only answer part.
pub fn gemini_text_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// The JSON text the model returns for a well-formed detail response.
pub fn detail_json(description: &str, substance: &str, usage: &str, fun_fact: &str) -> String {
    json!({
        "description": description,
        "substance": substance,
        "usage": usage,
        "funFact": fun_fact,
    })
    .to_string()
}

/// Answer every `generateContent` call with `text`.
pub async fn mount_generate_text(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/models/[^/]+:generateContent$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text_body(text)))
        .mount(server)
        .await;
}

/// Answer every `generateContent` call with an HTTP error.
pub async fn mount_generate_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/models/[^/]+:generateContent$"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn api_config_for(server: &MockServer) -> ApiConfig {
    ApiConfig::new(ApiKey::new(TEST_KEY)).with_base_url(server.uri())
}

pub fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(api_config_for(server)).expect("client builds for mock server")
}

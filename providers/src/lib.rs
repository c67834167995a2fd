//! Generative-text client and element detail fetching.
//!
//! # Architecture
//!
//! - [`DetailClient`] - the seam between detail fetching and the remote service.
//!   [`GeminiClient`] is the production implementation; tests substitute doubles.
//! - [`try_fetch_details`] - prompt, call, parse; returns a tagged result.
//! - [`fetch_details`] - never fails: any [`FetchError`] is logged and replaced
//!   by [`DetailRecord::fallback`].
//!
//! # Request Shape
//!
//! Each fetch is a single `generateContent` call carrying the prompt, a
//! temperature, and a response schema that constrains the model to a JSON
//! object with exactly four required string properties. There is no retry,
//! no cache and no timeout beyond the transport's connect timeout.

mod detail;
mod error;
pub mod gemini;
mod response_types;

pub use cyberelement_types;
pub use cyberelement_types::DetailRecord;
pub use detail::{
    DetailClient, GenerateRequest, build_prompt, detail_response_schema, fallback_for,
    fetch_details, try_fetch_details,
};
pub use error::{FetchError, FetchErrorKind};
pub use gemini::{ApiConfig, GeminiClient};

use std::sync::OnceLock;
use std::time::Duration;

/// Canonical Gemini API base URL.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sampling temperature used for detail requests unless configured otherwise.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

const CONNECT_TIMEOUT_SECS: u64 = 30;
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

fn base_client_builder() -> reqwest::ClientBuilder {
    use reqwest::header::{HeaderMap, HeaderValue};

    let mut default_headers = HeaderMap::new();
    default_headers.insert(
        reqwest::header::USER_AGENT,
        HeaderValue::from_static(concat!("cyberelement/", env!("CARGO_PKG_VERSION"))),
    );

    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .default_headers(default_headers)
}

/// Shared HTTPS-only client for the public endpoint.
pub fn http_client() -> Result<&'static reqwest::Client, FetchError> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = base_client_builder()
        .https_only(true)
        .build()
        .map_err(FetchError::Transport)?;
    Ok(CLIENT.get_or_init(|| client))
}

/// Client for an arbitrary base URL.
///
/// `https` endpoints share [`http_client`]; plain `http` endpoints (local
/// proxies, mock servers) get a dedicated client without the HTTPS-only guard.
pub fn http_client_for(base_url: &str) -> Result<reqwest::Client, FetchError> {
    if base_url.starts_with("https://") {
        return http_client().cloned();
    }
    tracing::debug!(base_url, "Building plain HTTP client for non-TLS endpoint");
    base_client_builder()
        .build()
        .map_err(FetchError::Transport)
}

/// Read an error body, truncated to a fixed cap so a hostile server cannot
/// balloon memory or logs.
pub async fn read_capped_error_body(response: reqwest::Response) -> String {
    use futures_util::StreamExt;
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let Ok(chunk) = chunk else { break };
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{http_client, http_client_for, read_capped_error_body};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn shared_client_is_reused() {
        let a = http_client().unwrap() as *const reqwest::Client;
        let b = http_client().unwrap() as *const reqwest::Client;
        assert_eq!(a, b);
    }

    #[test]
    fn plain_http_client_builds() {
        assert!(http_client_for("http://127.0.0.1:9").is_ok());
        assert!(http_client_for("https://example.com").is_ok());
    }

    #[tokio::test]
    async fn error_body_is_capped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(64 * 1024)))
            .mount(&server)
            .await;

        let response = reqwest::get(server.uri()).await.unwrap();
        let body = read_capped_error_body(response).await;
        assert!(body.ends_with("...(truncated)"));
        assert!(body.len() < 40 * 1024);
    }
}

//! Gemini `generateContent` client.

use serde_json::{Value, json};

use cyberelement_types::{ApiKey, ModelName};

use crate::detail::{DetailClient, GenerateRequest};
use crate::response_types::{FinishReason, Response};
use crate::{
    DEFAULT_TEMPERATURE, FetchError, GEMINI_API_BASE_URL, http_client_for, read_capped_error_body,
};

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    api_key: Option<ApiKey>,
    model: ModelName,
    temperature: f64,
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ApiConfig {
    /// Default model, temperature and endpoint.
    ///
    /// A missing key is accepted here; each request then fails with
    /// [`FetchError::MissingApiKey`].
    #[must_use]
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            model: ModelName::default(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: GEMINI_API_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: ModelName) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the endpoint. A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(ApiKey::expose_secret)
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn model(&self) -> &ModelName {
        &self.model
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Production [`DetailClient`] backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let http = http_client_for(config.base_url())?;
        Ok(Self { config, http })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl DetailClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<Option<String>, FetchError> {
        let Some(api_key) = self.config.api_key() else {
            return Err(FetchError::MissingApiKey);
        };

        let body = build_request_body(
            &request.prompt,
            self.config.temperature(),
            &request.response_schema,
        );

        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = read_capped_error_body(response).await;
            tracing::debug!(status = status.as_u16(), "Gemini request rejected");
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(FetchError::Transport)?;
        let parsed: Response = serde_json::from_str(&text)?;
        extract_text(parsed)
    }
}

/// Build the `generateContent` body for a single-turn, schema-constrained request.
#[must_use]
pub fn build_request_body(prompt: &str, temperature: f64, schema: &Value) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }],
        }],
        "generationConfig": {
            "temperature": temperature,
            "responseMimeType": "application/json",
            "responseSchema": schema,
        },
    })
}

/// Pull the answer text out of a decoded response.
fn extract_text(response: Response) -> Result<Option<String>, FetchError> {
    if let Some(error) = response.error {
        return Err(FetchError::Api(error.describe()));
    }

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(FetchError::Blocked(format!("prompt blocked: {reason}")));
    }

    let Some(candidate) = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
    else {
        return Ok(None);
    };

    let text: String = candidate
        .content
        .and_then(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| !part.thought)
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        let blocked = candidate
            .finish_reason
            .as_deref()
            .map(FinishReason::parse)
            .and_then(FinishReason::blocked_message);
        if let Some(message) = blocked {
            return Err(FetchError::Blocked(message.to_string()));
        }
        return Ok(None);
    }

    Ok(Some(text))
}

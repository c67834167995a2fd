//! Element detail fetching: prompt, schema, and the fallback policy.

use std::future::Future;

use serde_json::{Value, json};

use cyberelement_types::{DetailField, DetailRecord, ElementRecord};

use crate::FetchError;

/// One request to a generative-text service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    /// JSON schema the response text must conform to.
    pub response_schema: Value,
}

/// A generative-text service able to answer a [`GenerateRequest`].
///
/// `Ok(None)` means the call succeeded but produced no text.
pub trait DetailClient: Send + Sync {
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<Option<String>, FetchError>> + Send;
}

/// Build the instruction sent for `element`.
#[must_use]
pub fn build_prompt(element: &ElementRecord) -> String {
    format!(
        "You are a futuristic database AI for a high-tech scientific archive.\n\
         Access and retrieve data for the chemical element: {name} ({symbol}).\n\
         \n\
         Generate the response in JSON format with the following fields (in Simplified Chinese):\n\
         \n\
         1. description: A concise, technical, sci-fi styled description of the element. \
         Use terms like \"atomic structure\", \"molecular density\", or \"energy potential\". \
         Keep it under 50 words.\n\
         2. substance: One key real-world substance or compound that represents this element \
         (e.g., \"Diamond\" for Carbon, \"Microchips\" for Silicon).\n\
         3. usage: Key industrial, military, or technological applications.\n\
         4. funFact: A surprising or obscure scientific fact.\n\
         \n\
         Tone: Cold, precise, high-tech, futuristic database entry.",
        name = element.name,
        symbol = element.symbol,
    )
}

/// Response schema: an object with four required string properties.
#[must_use]
pub fn detail_response_schema() -> Value {
    let mut properties = serde_json::Map::new();
    for field in [
        DetailField::Description,
        DetailField::Usage,
        DetailField::Substance,
        DetailField::FunFact,
    ] {
        let description = match field {
            DetailField::Description => "Futuristic scientific description.",
            DetailField::Usage => "Industrial uses.",
            DetailField::Substance => "Representative substance.",
            DetailField::FunFact => "Interesting fact.",
        };
        properties.insert(
            field.json_key().to_string(),
            json!({ "type": "STRING", "description": description }),
        );
    }

    json!({
        "type": "OBJECT",
        "properties": Value::Object(properties),
        "required": ["description", "usage", "substance", "funFact"],
    })
}

/// Fetch and parse details for `element`, reporting failures.
pub async fn try_fetch_details<C>(
    client: &C,
    element: &ElementRecord,
) -> Result<DetailRecord, FetchError>
where
    C: DetailClient + ?Sized,
{
    let request = GenerateRequest {
        prompt: build_prompt(element),
        response_schema: detail_response_schema(),
    };

    tracing::debug!(element = element.symbol, "Requesting element details");
    let text = client
        .generate(&request)
        .await?
        .filter(|text| !text.trim().is_empty())
        .ok_or(FetchError::EmptyResponse)?;

    Ok(DetailRecord::from_json(&text)?)
}

/// Fetch details for `element`; never fails.
///
/// Any failure (network, auth, quota, empty or unparsable text) is logged and
/// replaced by [`DetailRecord::fallback`].
pub async fn fetch_details<C>(client: &C, element: &ElementRecord) -> DetailRecord
where
    C: DetailClient + ?Sized,
{
    try_fetch_details(client, element)
        .await
        .unwrap_or_else(|err| fallback_for(element, &err))
}

/// Log a failed fetch for `element` and return the sentinel record shown in
/// its place.
#[must_use]
pub fn fallback_for(element: &ElementRecord, err: &FetchError) -> DetailRecord {
    tracing::warn!(
        element = element.symbol,
        kind = ?err.kind(),
        error = %err,
        "Failed to fetch element details"
    );
    DetailRecord::fallback()
}

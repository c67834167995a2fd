//! Typed `generateContent` response envelope.
//!
//! Only the fields detail fetching reads are modeled; everything else is
//! ignored by serde.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Response {
    pub candidates: Option<Vec<Candidate>>,
    pub error: Option<ErrorInfo>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Content {
    pub parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Part {
    pub text: Option<String>,
    /// Thinking-mode summaries are not part of the answer.
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorInfo {
    pub message: Option<String>,
    pub code: Option<i32>,
    pub status: Option<String>,
}

impl ErrorInfo {
    pub(crate) fn describe(&self) -> String {
        let message = self.message.as_deref().unwrap_or("Unknown error");
        match (&self.status, self.code) {
            (Some(status), Some(code)) => format!("{status} ({code}): {message}"),
            (Some(status), None) => format!("{status}: {message}"),
            (None, Some(code)) => format!("{code}: {message}"),
            (None, None) => message.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Known Gemini finish reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Language,
    Blocklist,
    ProhibitedContent,
    Spii,
    Other,
    Unknown,
}

impl FinishReason {
    pub(crate) fn parse(s: &str) -> Self {
        match s {
            "STOP" => Self::Stop,
            "MAX_TOKENS" => Self::MaxTokens,
            "SAFETY" => Self::Safety,
            "RECITATION" => Self::Recitation,
            "LANGUAGE" => Self::Language,
            "BLOCKLIST" => Self::Blocklist,
            "PROHIBITED_CONTENT" => Self::ProhibitedContent,
            "SPII" => Self::Spii,
            "OTHER" => Self::Other,
            _ => Self::Unknown,
        }
    }

    /// Returns a message if this reason means the answer was withheld.
    pub(crate) fn blocked_message(self) -> Option<&'static str> {
        match self {
            Self::Stop | Self::MaxTokens | Self::Other | Self::Unknown => None,
            Self::Safety => Some("Content filtered by safety settings"),
            Self::Recitation => Some("Response blocked: recitation"),
            Self::Language => Some("Unsupported language"),
            Self::Blocklist => Some("Response blocked: blocklist"),
            Self::ProhibitedContent => Some("Response blocked: prohibited content"),
            Self::Spii => Some("Response blocked: sensitive personal information"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorInfo, FinishReason, Response};

    #[test]
    fn finish_reason_stop_is_not_blocked() {
        assert!(FinishReason::parse("STOP").blocked_message().is_none());
        assert!(FinishReason::parse("MAX_TOKENS").blocked_message().is_none());
    }

    #[test]
    fn finish_reason_safety_is_blocked() {
        assert!(FinishReason::parse("SAFETY").blocked_message().is_some());
    }

    #[test]
    fn unknown_finish_reason_is_tolerated() {
        assert_eq!(FinishReason::parse("NEW_REASON"), FinishReason::Unknown);
        assert!(FinishReason::Unknown.blocked_message().is_none());
    }

    #[test]
    fn deserializes_minimal_envelope() {
        let response: Response = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{}"}],"role":"model"},"finishReason":"STOP"}],"usageMetadata":{"promptTokenCount":3}}"#,
        )
        .unwrap();
        let candidates = response.candidates.unwrap();
        assert_eq!(candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn error_info_describe() {
        let info = ErrorInfo {
            message: Some("API key not valid".into()),
            code: Some(400),
            status: Some("INVALID_ARGUMENT".into()),
        };
        assert_eq!(info.describe(), "INVALID_ARGUMENT (400): API key not valid");
    }
}

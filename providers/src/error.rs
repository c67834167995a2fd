use thiserror::Error;

/// Why a detail fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("API error: {0}")]
    Api(String),
    #[error("response blocked: {0}")]
    Blocked(String),
    #[error("service returned no text")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Copyable classification of a [`FetchError`], suitable for UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Network,
    Auth,
    Quota,
    Service,
    EmptyResponse,
    Malformed,
}

impl FetchError {
    #[must_use]
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::MissingApiKey => FetchErrorKind::Auth,
            FetchError::Transport(_) => FetchErrorKind::Network,
            FetchError::Http { status, .. } => match status {
                401 | 403 => FetchErrorKind::Auth,
                429 => FetchErrorKind::Quota,
                _ => FetchErrorKind::Service,
            },
            FetchError::Api(_) | FetchError::Blocked(_) => FetchErrorKind::Service,
            FetchError::EmptyResponse => FetchErrorKind::EmptyResponse,
            FetchError::Parse(_) => FetchErrorKind::Malformed,
        }
    }
}

impl FetchErrorKind {
    /// Short uppercase label for status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FetchErrorKind::Network => "LINK FAILURE",
            FetchErrorKind::Auth => "ACCESS DENIED",
            FetchErrorKind::Quota => "QUOTA EXHAUSTED",
            FetchErrorKind::Service => "NODE FAULT",
            FetchErrorKind::EmptyResponse => "EMPTY TRANSMISSION",
            FetchErrorKind::Malformed => "CORRUPTED PACKET",
        }
    }
}

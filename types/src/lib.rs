//! Core domain types for CyberElement.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod dataset;
mod detail;
mod element;
mod sanitize;
pub mod ui;

pub use dataset::{
    ELEMENT_COUNT, ELEMENTS, GRID_COLUMNS, GRID_ROWS, element_at, element_by_number,
    element_by_symbol,
};
pub use detail::{DetailField, DetailRecord};
pub use element::{ElementCategory, ElementRecord, GridPosition};
pub use sanitize::sanitize_terminal_text;

use std::fmt;
use thiserror::Error;

// ============================================================================
// Credentials & Model Types
// ============================================================================

/// Gemini API credential.
///
/// The secret never appears in `Debug` output so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Blank input yields `None`.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(<redacted>)")
    }
}

/// Default generative model used for element detail requests.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelParseError {
    #[error("model name must not be empty")]
    Empty,
    #[error("model name must not contain '/' or whitespace: {0}")]
    InvalidCharacters(String),
}

/// A validated Gemini model identifier (the `{model}` in `models/{model}:generateContent`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelName(String);

impl ModelName {
    pub fn parse(raw: &str) -> Result<Self, ModelParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelParseError::Empty);
        }
        let trimmed = trimmed.strip_prefix("models/").unwrap_or(trimmed);
        if trimmed.contains('/') || trimmed.chars().any(char::is_whitespace) {
            return Err(ModelParseError::InvalidCharacters(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelName {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiKey, DEFAULT_MODEL, ModelName, ModelParseError};

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("AIza-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("secret"));
        assert_eq!(key.expose_secret(), "AIza-secret");
    }

    #[test]
    fn api_key_rejects_blank() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new("  k  ").unwrap().expose_secret(), "k");
    }

    #[test]
    fn model_name_defaults_to_flash() {
        assert_eq!(ModelName::default().as_str(), DEFAULT_MODEL);
    }

    #[test]
    fn model_name_strips_models_prefix() {
        let model = ModelName::parse("models/gemini-2.5-pro").unwrap();
        assert_eq!(model.as_str(), "gemini-2.5-pro");
    }

    #[test]
    fn model_name_rejects_bad_input() {
        assert_eq!(ModelName::parse("  "), Err(ModelParseError::Empty));
        assert!(matches!(
            ModelName::parse("gemini 2"),
            Err(ModelParseError::InvalidCharacters(_))
        ));
        assert!(matches!(
            ModelName::parse("a/b"),
            Err(ModelParseError::InvalidCharacters(_))
        ));
    }
}

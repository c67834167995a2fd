//! User configuration for CyberElement.
//!
//! Settings come from `~/.cyberelement/config.toml` and the environment.
//! Environment variables win over the file. A missing file is not an error;
//! an unreadable or malformed one is reported and callers fall back to
//! defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use cyberelement_types::ui::UiOptions;
use cyberelement_types::{ApiKey, ModelName};

/// Primary API key variable.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Secondary API key variable, consulted when [`API_KEY_ENV`] is unset or blank.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";
/// Endpoint override for proxies and local mocks.
pub const BASE_URL_ENV: &str = "CYBERELEMENT_GEMINI_BASE_URL";

#[derive(Debug, Default, Deserialize)]
pub struct CyberConfig {
    pub app: Option<AppConfig>,
    pub google: Option<GoogleConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for borders and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the panel animation and the typing reveal.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Default, Deserialize)]
pub struct GoogleConfig {
    /// May reference the environment as `${VAR}`.
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub base_url: Option<String>,
}

// Manual Debug impl to keep the key out of logs.
impl fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    "[REDACTED]"
                } else {
                    "None"
                },
            )
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Effective settings after merging file and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<ApiKey>,
    pub model: ModelName,
    /// `None` keeps the client default.
    pub temperature: Option<f64>,
    /// `None` keeps the public endpoint.
    pub base_url: Option<String>,
    pub ui: UiOptions,
}

/// Replace every `${VAR}` in `value` using `lookup`.
///
/// Unset variables expand to the empty string; an unclosed `${` is kept as is.
#[must_use]
pub fn expand_env_vars(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &after[..end];
        if !name.is_empty() {
            out.push_str(&lookup(name).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl CyberConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {}: {}", path.display(), source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map(Some).map_err(|source| {
            tracing::warn!("Failed to parse config at {}: {}", path.display(), source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    /// Merge with the process environment.
    #[must_use]
    pub fn resolve(&self) -> Settings {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Merge with an explicit environment lookup.
    #[must_use]
    pub fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> Settings {
        let google = self.google.as_ref();

        let api_key = env(API_KEY_ENV)
            .and_then(ApiKey::new)
            .or_else(|| env(FALLBACK_API_KEY_ENV).and_then(ApiKey::new))
            .or_else(|| {
                google
                    .and_then(|g| g.api_key.as_deref())
                    .map(|raw| expand_env_vars(raw, &env))
                    .and_then(ApiKey::new)
            });

        let model = match google.and_then(|g| g.model.as_deref()) {
            Some(raw) => ModelName::parse(raw).unwrap_or_else(|err| {
                tracing::warn!("Ignoring configured model {raw:?}: {err}");
                ModelName::default()
            }),
            None => ModelName::default(),
        };

        let temperature = google
            .and_then(|g| g.temperature)
            .filter(|t| t.is_finite() && (0.0..=2.0).contains(t));

        let base_url = env(BASE_URL_ENV)
            .or_else(|| google.and_then(|g| g.base_url.clone()))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Settings {
            api_key,
            model,
            temperature,
            base_url,
            ui: self.ui_options(),
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cyberelement").join("config.toml"))
}

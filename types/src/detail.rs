//! AI-sourced narrative fields for one element.

use serde::{Deserialize, Serialize};

const FALLBACK_DESCRIPTION: &str =
    "ERROR: Database connection unstable. Unable to retrieve spectral data.";
const FALLBACK_UNKNOWN: &str = "UNKNOWN";
const FALLBACK_FUN_FACT: &str = "System requires maintenance.";

/// Narrative detail for a selected element.
///
/// Deserialization requires all four fields; unknown keys are ignored.
/// A value is always complete; there is no partially-filled record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    description: String,
    substance: String,
    usage: String,
    #[serde(rename = "funFact")]
    fun_fact: String,
}

impl DetailRecord {
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        substance: impl Into<String>,
        usage: impl Into<String>,
        fun_fact: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            substance: substance.into(),
            usage: usage.into(),
            fun_fact: fun_fact.into(),
        }
    }

    /// The sentinel record substituted when a fetch fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(
            FALLBACK_DESCRIPTION,
            FALLBACK_UNKNOWN,
            FALLBACK_UNKNOWN,
            FALLBACK_FUN_FACT,
        )
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// Parse the service's JSON text payload.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn substance(&self) -> &str {
        &self.substance
    }

    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    #[must_use]
    pub fn fun_fact(&self) -> &str {
        &self.fun_fact
    }

    #[must_use]
    pub fn field(&self, field: DetailField) -> &str {
        match field {
            DetailField::Description => self.description(),
            DetailField::Substance => self.substance(),
            DetailField::Usage => self.usage(),
            DetailField::FunFact => self.fun_fact(),
        }
    }
}

/// Addresses one of the four fields of a [`DetailRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
    Description,
    Substance,
    Usage,
    FunFact,
}

impl DetailField {
    pub const ALL: [DetailField; 4] = [
        DetailField::Description,
        DetailField::Substance,
        DetailField::Usage,
        DetailField::FunFact,
    ];

    /// JSON property name in the response schema.
    #[must_use]
    pub const fn json_key(self) -> &'static str {
        match self {
            DetailField::Description => "description",
            DetailField::Substance => "substance",
            DetailField::Usage => "usage",
            DetailField::FunFact => "funFact",
        }
    }
}

use serde::{Deserialize, Serialize};

/// Result of pulling a place name out of free text.
///
/// Serialized as a single string; [`ExtractionResult::SENTINEL`] stands for
/// "no location found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtractionResult {
    Location(String),
    NoLocation,
}

impl ExtractionResult {
    pub const SENTINEL: &'static str = "UNKNOWN";

    /// Normalize raw provider output: trim whitespace and map empty text or
    /// the sentinel (any case) to `NoLocation`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::SENTINEL) {
            Self::NoLocation
        } else {
            Self::Location(trimmed.to_string())
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Location(name) => Some(name),
            Self::NoLocation => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Location(_))
    }

    /// Location name to feed the resolver; falls back to the original text.
    pub fn location_or<'a>(&'a self, original: &'a str) -> &'a str {
        self.location().unwrap_or(original)
    }
}

impl From<String> for ExtractionResult {
    fn from(raw: String) -> Self {
        Self::from_raw(&raw)
    }
}

impl From<ExtractionResult> for String {
    fn from(result: ExtractionResult) -> Self {
        match result {
            ExtractionResult::Location(name) => name,
            ExtractionResult::NoLocation => ExtractionResult::SENTINEL.to_string(),
        }
    }
}

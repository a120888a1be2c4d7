use serde::{Deserialize, Serialize};

pub const FALLBACK_NAME: &str = "Akosua";
pub const FALLBACK_MEANING: &str = "Born on Sunday";
pub const FALLBACK_EXPLANATION: &str = "Based on your context, this traditional Akan day name represents new beginnings and hope, which seems to align with your situation. Akosua is a name given to females born on Sunday, symbolizing brightness and fresh starts.";

/// A name suggestion produced by the text-generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub name: String,
    pub meaning: String,
    pub explanation: String,
}

impl GeneratedName {
    /// The record returned whenever backend output cannot be used.
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            meaning: FALLBACK_MEANING.to_string(),
            explanation: FALLBACK_EXPLANATION.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.meaning.is_empty() && !self.explanation.is_empty()
    }

    /// Parses raw model output, yielding `None` unless it is a JSON object with
    /// all three fields present as non-empty strings.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str::<GeneratedName>(raw.trim())
            .ok()
            .filter(GeneratedName::is_complete)
    }
}

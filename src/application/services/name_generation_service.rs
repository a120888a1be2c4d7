use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::GeneratedName;

pub const SYSTEM_PROMPT: &str = "You are an expert in Ghanaian culture and naming traditions. You provide authentic, respectful, and culturally accurate name suggestions.";

/// Builds the user turn sent to the text-generation backend.
pub fn build_name_prompt(context: &str) -> String {
    format!(
        r#"Based on the following context about a person, generate an authentic Ghanaian name that would be culturally appropriate and meaningful. Consider traditional naming practices including Akan day names, circumstantial names, and names reflecting hopes/attributes.

Context: "{context}"

Please respond with a JSON object containing:
- "name": The Ghanaian name (include pronunciation if helpful)
- "meaning": Brief meaning/translation of the name
- "explanation": 2-3 sentences explaining how this name connects to their context and why it's appropriate

Respond with the JSON object only. Focus on authentic Ghanaian naming traditions from cultures like Akan, Ewe, Ga, etc. Be respectful and culturally accurate."#
    )
}

pub struct NameGenerationService<L>
where
    L: LlmClient,
{
    llm_client: Option<Arc<L>>,
}

impl<L> NameGenerationService<L>
where
    L: LlmClient,
{
    /// `None` means no credential is configured for the text-generation backend.
    pub fn new(llm_client: Option<Arc<L>>) -> Self {
        Self { llm_client }
    }

    pub fn is_configured(&self) -> bool {
        self.llm_client.is_some()
    }

    pub async fn generate(&self, context: &str) -> Result<GeneratedName, NameGenerationError> {
        if context.trim().is_empty() {
            return Err(NameGenerationError::InvalidInput(
                "Context is required".to_string(),
            ));
        }

        let llm_client = self
            .llm_client
            .as_ref()
            .ok_or(NameGenerationError::MissingCredential)?;

        tracing::debug!(context_chars = context.chars().count(), "Requesting contextual name");

        let prompt = build_name_prompt(context);
        let content = llm_client
            .complete(SYSTEM_PROMPT, &prompt)
            .await
            .map_err(NameGenerationError::Upstream)?;

        match GeneratedName::parse(&content) {
            Some(generated) => {
                tracing::info!(name = %generated.name, "Contextual name generated");
                Ok(generated)
            }
            None => {
                tracing::warn!(
                    chars = content.len(),
                    "Completion was not a complete name object, returning fallback"
                );
                Ok(GeneratedName::fallback())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NameGenerationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("text-generation credential not configured")]
    MissingCredential,
    #[error("upstream: {0}")]
    Upstream(LlmClientError),
}

use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one system turn and one user turn, returning the first completion's text.
    async fn complete(&self, system_prompt: &str, user_prompt: &str)
    -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("no content in completion")]
    EmptyContent,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

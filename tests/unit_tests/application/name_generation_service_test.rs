use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ghana_names::application::ports::{LlmClient, LlmClientError};
use ghana_names::application::services::{
    NameGenerationError, NameGenerationService, SYSTEM_PROMPT,
};
use ghana_names::domain::GeneratedName;

enum Reply {
    Text(&'static str),
    Status(u16),
    Empty,
}

struct RecordingLlmClient {
    reply: Reply,
    calls: AtomicUsize,
    last_prompts: Mutex<Option<(String, String)>>,
}

impl RecordingLlmClient {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompts: Mutex::new(None),
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompts.lock().unwrap() =
            Some((system_prompt.to_string(), user_prompt.to_string()));
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Status(status) => Err(LlmClientError::UpstreamStatus {
                status,
                body: "upstream said no".to_string(),
            }),
            Reply::Empty => Err(LlmClientError::EmptyContent),
        }
    }
}

#[tokio::test]
async fn given_valid_reply_when_generating_then_returns_parsed_name_and_sends_context() {
    let client = RecordingLlmClient::new(Reply::Text(
        r#"{"name": "Esi", "meaning": "Born on Sunday", "explanation": "A Fante Sunday name."}"#,
    ));
    let service = NameGenerationService::new(Some(Arc::clone(&client)));

    let generated = service.generate("Fante girl born on Sunday").await.unwrap();

    assert_eq!(generated.name, "Esi");
    assert_eq!(generated.meaning, "Born on Sunday");
    let (system, user) = client.last_prompts.lock().unwrap().clone().unwrap();
    assert_eq!(system, SYSTEM_PROMPT);
    assert!(user.contains("Fante girl born on Sunday"));
}

#[tokio::test]
async fn given_truncated_json_reply_when_generating_then_returns_fallback_without_error() {
    let client = RecordingLlmClient::new(Reply::Text(r#"{"name": "Esi""#));
    let service = NameGenerationService::new(Some(client));

    let generated = service.generate("anything").await.unwrap();

    assert_eq!(generated, GeneratedName::fallback());
}

#[tokio::test]
async fn given_reply_missing_explanation_when_generating_then_returns_fallback() {
    let client = RecordingLlmClient::new(Reply::Text(r#"{"name": "Kofi", "meaning": "Friday"}"#));
    let service = NameGenerationService::new(Some(client));

    let generated = service.generate("born on Friday").await.unwrap();

    assert_eq!(generated, GeneratedName::fallback());
}

#[tokio::test]
async fn given_blank_context_when_generating_then_rejects_before_calling_backend() {
    let client = RecordingLlmClient::new(Reply::Text("{}"));
    let service = NameGenerationService::new(Some(Arc::clone(&client)));

    let result = service.generate("   ").await;

    assert!(matches!(result, Err(NameGenerationError::InvalidInput(_))));
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_no_client_when_generating_then_returns_missing_credential() {
    let service: NameGenerationService<RecordingLlmClient> = NameGenerationService::new(None);

    let result = service.generate("born at dawn").await;

    assert!(matches!(result, Err(NameGenerationError::MissingCredential)));
    assert!(!service.is_configured());
}

#[tokio::test]
async fn given_upstream_failure_when_generating_then_propagates_status() {
    let client = RecordingLlmClient::new(Reply::Status(502));
    let service = NameGenerationService::new(Some(client));

    let result = service.generate("born at dawn").await;

    assert!(matches!(
        result,
        Err(NameGenerationError::Upstream(LlmClientError::UpstreamStatus {
            status: 502,
            ..
        }))
    ));
}

#[tokio::test]
async fn given_empty_completion_when_generating_then_surfaces_upstream_error() {
    let client = RecordingLlmClient::new(Reply::Empty);
    let service = NameGenerationService::new(Some(client));

    let result = service.generate("born at dawn").await;

    assert!(matches!(
        result,
        Err(NameGenerationError::Upstream(LlmClientError::EmptyContent))
    ));
}

#[tokio::test]
async fn given_context_with_credentials_when_generating_then_backend_receives_it_unredacted() {
    let client = RecordingLlmClient::new(Reply::Text("not json"));
    let service = NameGenerationService::new(Some(Arc::clone(&client)));

    service.generate("twins, token=abc123").await.unwrap();

    let (_, user) = client.last_prompts.lock().unwrap().clone().unwrap();
    assert!(user.contains(r#"Context: "twins, token=abc123""#));
}

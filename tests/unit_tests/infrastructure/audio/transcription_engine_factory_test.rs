use ghana_names::infrastructure::audio::{TranscriptionEngineFactory, TranscriptionProvider};
use ghana_names::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

fn settings_with(
    openai: Option<&str>,
    assembly_ai: Option<&str>,
    google: Option<&str>,
) -> TranscriptionSettings {
    let mut settings = TranscriptionSettings::default();
    settings.openai.api_key = openai.map(String::from);
    settings.assembly_ai.api_key = assembly_ai.map(String::from);
    settings.google.api_key = google.map(String::from);
    settings
}

#[test]
fn given_no_credentials_when_selecting_then_returns_none() {
    let settings = settings_with(None, None, None);

    assert_eq!(TranscriptionEngineFactory::select(&settings), None);
    assert!(TranscriptionEngineFactory::create(&settings).is_none());
}

#[test]
fn given_blank_credentials_when_selecting_then_they_count_as_absent() {
    let settings = settings_with(Some("  "), Some(""), None);
    assert_eq!(TranscriptionEngineFactory::select(&settings), None);
}

#[test]
fn given_all_credentials_when_selecting_then_prefers_openai() {
    let settings = settings_with(Some("sk"), Some("aai"), Some("g"));
    assert_eq!(
        TranscriptionEngineFactory::select(&settings),
        Some(TranscriptionProvider::OpenAi)
    );
}

#[test]
fn given_assembly_and_google_credentials_when_selecting_then_prefers_assembly_ai() {
    let settings = settings_with(None, Some("aai"), Some("g"));
    assert_eq!(
        TranscriptionEngineFactory::select(&settings),
        Some(TranscriptionProvider::AssemblyAi)
    );
}

#[test]
fn given_only_google_credential_when_creating_then_builds_google_engine() {
    let settings = settings_with(None, None, Some("g"));

    let engine = TranscriptionEngineFactory::create(&settings).unwrap();

    assert_eq!(engine.provider_name(), "google");
}

#[test]
fn given_explicit_provider_when_selecting_then_overrides_precedence() {
    let mut settings = settings_with(Some("sk"), None, Some("g"));
    settings.provider = Some(TranscriptionProviderSetting::Google);

    assert_eq!(
        TranscriptionEngineFactory::select(&settings),
        Some(TranscriptionProvider::Google)
    );
}

#[test]
fn given_explicit_provider_without_its_credential_when_selecting_then_returns_none() {
    let mut settings = settings_with(Some("sk"), None, None);
    settings.provider = Some(TranscriptionProviderSetting::AssemblyAi);

    assert_eq!(TranscriptionEngineFactory::select(&settings), None);
}
